use std::io::{self, Read, Write};
use flate2::{Compression, write::GzEncoder, read::GzDecoder};

/// 魔数常量 - 用于标识文章快照格式
pub const MAGIC_BYTES: &[u8] = b"BLOGP";

/// 当前快照格式版本
pub const SNAPSHOT_VERSION: [u8; 2] = [1, 0];

/// 头部长度：魔数 + 版本号 + 原始大小
const HEADER_LEN: usize = MAGIC_BYTES.len() + 2 + 4;

/// 将对象序列化为二进制格式
pub fn to_binary<T: serde::Serialize>(obj: &T) -> Result<Vec<u8>, io::Error> {
    bincode::serde::encode_to_vec(obj, bincode::config::standard())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("序列化失败: {}", e)))
}

/// 从二进制格式反序列化对象
pub fn from_binary<T: for<'a> serde::de::Deserialize<'a>>(data: &[u8]) -> Result<T, io::Error> {
    bincode::serde::decode_from_slice(data, bincode::config::standard())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("反序列化失败: {}", e)))
        .map(|(value, _)| value)
}

/// 将对象序列化为压缩的快照
pub fn to_compressed<T: serde::Serialize>(obj: &T) -> Result<Vec<u8>, io::Error> {
    let binary = to_binary(obj)?;

    let mut output = Vec::with_capacity(HEADER_LEN + binary.len() / 2);
    output.extend_from_slice(MAGIC_BYTES);
    output.extend_from_slice(&SNAPSHOT_VERSION);
    output.extend_from_slice(&(binary.len() as u32).to_le_bytes());

    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&binary)?;
    output.extend_from_slice(&encoder.finish()?);

    Ok(output)
}

/// 从压缩的快照反序列化对象
pub fn from_compressed<T: for<'a> serde::de::Deserialize<'a>>(data: &[u8]) -> Result<T, io::Error> {
    let (_, original_size) = read_header(data)?;

    // 头部大小未经校验，预分配量按压缩数据长度封顶，读取量不超过声明大小加一
    let payload = &data[HEADER_LEN..];
    let mut decoder = GzDecoder::new(payload).take(original_size as u64 + 1);
    let mut decompressed = Vec::with_capacity(original_size.min(payload.len().saturating_mul(8)));
    decoder.read_to_end(&mut decompressed)?;

    if decompressed.len() != original_size {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("解压后数据大小不匹配: 期望 {} 字节, 实际 {} 字节",
                   original_size, decompressed.len())
        ));
    }

    from_binary(&decompressed)
}

/// 验证快照头部，返回版本号
pub fn validate_compressed_data(data: &[u8]) -> Result<[u8; 2], io::Error> {
    read_header(data).map(|(version, _)| version)
}

// 解析并校验头部：魔数、版本兼容性、原始大小
fn read_header(data: &[u8]) -> Result<([u8; 2], usize), io::Error> {
    if data.len() < HEADER_LEN {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("数据太短，无法解析: {} 字节", data.len())
        ));
    }

    if &data[..MAGIC_BYTES.len()] != MAGIC_BYTES {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "无效的文件格式：魔数不匹配"
        ));
    }

    let version_offset = MAGIC_BYTES.len();
    let version = [data[version_offset], data[version_offset + 1]];
    if version[0] > SNAPSHOT_VERSION[0] {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("不支持的版本: {}.{}", version[0], version[1])
        ));
    }

    let mut size_bytes = [0u8; 4];
    size_bytes.copy_from_slice(&data[version_offset + 2..HEADER_LEN]);
    Ok((version, u32::from_le_bytes(size_bytes) as usize))
}
