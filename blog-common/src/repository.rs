use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::compression;
use crate::data::sample_posts;
use crate::error::{BlogError, Result};
use crate::models::Post;

// 内置示例文章仓库，首次访问时构建
static SAMPLE: OnceCell<PostRepository> = OnceCell::new();

/// 文章仓库 - 加载后只读的文章集合及其派生索引
#[derive(Debug, Clone)]
pub struct PostRepository {
    /// 按作者书写顺序排列的文章
    posts: Vec<Post>,
    /// 文章ID -> 文章位置
    id_index: HashMap<u32, usize>,
    /// 所有标签，按首次出现顺序去重
    tags: Vec<String>,
}

/// 快照内容 - 只保存文章本身，索引在加载时重建
#[derive(Serialize, Deserialize)]
struct Snapshot {
    posts: Vec<Post>,
}

impl PostRepository {
    /// 从文章列表构建仓库，校验ID唯一且为正
    pub fn from_posts(posts: Vec<Post>) -> Result<Self> {
        let mut id_index = HashMap::with_capacity(posts.len());
        let mut seen_tags = HashSet::new();
        let mut tags = Vec::new();

        for (i, post) in posts.iter().enumerate() {
            if post.id == 0 {
                return Err(BlogError::InvalidId(post.id));
            }
            if id_index.insert(post.id, i).is_some() {
                return Err(BlogError::DuplicateId(post.id));
            }
            for tag in &post.tags {
                if seen_tags.insert(tag.clone()) {
                    tags.push(tag.clone());
                }
            }
        }

        debug!(posts = posts.len(), tags = tags.len(), "文章仓库构建完成");

        Ok(Self { posts, id_index, tags })
    }

    /// 从页面数据文件的 JSON 数组加载
    pub fn from_json(json: &str) -> Result<Self> {
        let posts: Vec<Post> = serde_json::from_str(json)?;
        Self::from_posts(posts)
    }

    /// 从压缩快照加载
    pub fn from_snapshot(data: &[u8]) -> Result<Self> {
        let snapshot: Snapshot = compression::from_compressed(data)?;
        Self::from_posts(snapshot.posts)
    }

    /// 导出为压缩快照
    pub fn to_snapshot(&self) -> Result<Vec<u8>> {
        let snapshot = Snapshot { posts: self.posts.clone() };
        Ok(compression::to_compressed(&snapshot)?)
    }

    /// 内置示例文章
    pub fn sample() -> Result<&'static PostRepository> {
        SAMPLE.get_or_try_init(|| Self::from_posts(sample_posts()?))
    }

    /// 全部文章，保持插入顺序
    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// 按ID精确查找
    pub fn by_id(&self, id: u32) -> Result<&Post> {
        self.id_index
            .get(&id)
            .and_then(|&i| self.posts.get(i))
            .ok_or(BlogError::NotFound(id))
    }

    /// 所有不重复的标签，按首次出现顺序
    pub fn unique_tags(&self) -> &[String] {
        &self.tags
    }
}
