use crate::Result;
#[cfg(not(feature = "clipboard"))]
use crate::PlatformError;

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new()
            .map_err(|err| crate::PlatformError::Clipboard(err.to_string()))?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text.to_string())
            .map_err(|err| crate::PlatformError::Clipboard(err.to_string()))
    }
}

#[cfg(feature = "clipboard")]
pub fn system_clipboard() -> Result<Box<dyn Clipboard>> {
    Ok(Box::new(SystemClipboard::new()?))
}

#[cfg(not(feature = "clipboard"))]
pub fn system_clipboard() -> Result<Box<dyn Clipboard>> {
    Err(PlatformError::Unavailable(
        "clipboard support was not compiled in (enable the `clipboard` feature)".to_string(),
    ))
}

/// Copies `text` for a process that exits right after.
///
/// On Linux the clipboard contents live only as long as their owner, so
/// this blocks until another application takes the selection over.
#[cfg(all(feature = "clipboard", target_os = "linux"))]
pub fn copy_once(text: &str) -> Result<()> {
    use arboard::SetExtLinux;

    let mut clipboard = arboard::Clipboard::new()
        .map_err(|err| crate::PlatformError::Clipboard(err.to_string()))?;
    clipboard
        .set()
        .wait()
        .text(text.to_string())
        .map_err(|err| crate::PlatformError::Clipboard(err.to_string()))
}

#[cfg(all(feature = "clipboard", not(target_os = "linux")))]
pub fn copy_once(text: &str) -> Result<()> {
    SystemClipboard::new()?.set_text(text)
}

#[cfg(not(feature = "clipboard"))]
pub fn copy_once(_text: &str) -> Result<()> {
    system_clipboard().map(|_| ())
}

/// Keeps copied text in memory; used where no system clipboard exists.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
