/// 文章详情页的页面名称
pub const POST_PAGE: &str = "post.html";

/// 构建文章详情页链接：`post.html?id=<id>`
///
/// 书签和分享链接依赖这个格式，不要修改。
pub fn post_href(id: u32) -> String {
    format!("{}?id={}", POST_PAGE, id)
}

/// 从查询字符串中取出参数值（已解码），例如 `?id=3&ref=x`
pub fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            Some((parts.next()?, parts.next().unwrap_or("")))
        })
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            urlencoding::decode(&value)
                .map(|v| v.into_owned())
                .unwrap_or(value)
        })
}

/// 解析文章ID参数
///
/// 与页面脚本的 `parseInt` 行为一致：忽略前导空白，`0x` 前缀按十六进制读取，
/// 读取开头的数字，后面的字符被忽略。没有数字、负数或超出范围时返回 `None`。
pub fn parse_post_id(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let (digits, radix) = match unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (unsigned, 10),
    };
    let digits_len = digits
        .bytes()
        .take_while(|b| (*b as char).is_digit(radix))
        .count();
    if digits_len == 0 {
        return None;
    }
    u32::from_str_radix(&digits[..digits_len], radix).ok()
}
