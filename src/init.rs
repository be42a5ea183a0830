use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// 同時寫入 stderr 與紀錄檔的 writer
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

/// 初始化 logging
///
/// 程序啟動時呼叫一次，之後不需要明確關閉。
/// 每筆紀錄帶時間戳記與等級，同時輸出到 stderr 與指定的紀錄檔
/// （附加寫入，檔案不存在時建立）。預設等級為 info，可用 RUST_LOG 覆寫
pub fn init_logging(log_file: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("無法開啟紀錄檔: {}", log_file.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(TeeWriter { file })))
        .format_timestamp_millis()
        .try_init()
        .context("無法初始化 logging")?;

    Ok(())
}
