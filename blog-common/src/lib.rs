pub mod compression;
pub mod data;
pub mod date;
pub mod error;
pub mod links;
pub mod models;
pub mod repository;
pub mod theme;

// 重新导出常用类型和函数，方便直接使用
pub use date::{format_date, format_naive_date, parse_date};
pub use error::{BlogError, Result};
pub use links::{parse_post_id, post_href, query_param};
pub use models::Post;
pub use repository::PostRepository;
pub use theme::{CommentWidget, Theme};
