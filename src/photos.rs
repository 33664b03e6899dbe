/// Async photo loading
///
/// Photos are read off the UI thread via tokio, validated with the image
/// crate (a handle to undecodable bytes would only fail later, invisibly,
/// inside the renderer) and handed to iced as raw bytes.

use std::path::PathBuf;

use iced::widget::image::Handle;

use crate::error::PortfolioError;

/// Read and validate one photo, returning a displayable handle
pub async fn load(path: PathBuf) -> Result<Handle, PortfolioError> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| PortfolioError::Read {
            path: path.clone(),
            source,
        })?;

    image::load_from_memory(&bytes).map_err(|source| PortfolioError::Decode {
        path: path.clone(),
        source,
    })?;

    Ok(Handle::from_bytes(bytes))
}

/// Like `load`, but reports failures on stderr and swallows them.
/// Used from UI tasks where a missing photo must not surface as an error
/// state, only as a cell that never fades back in.
pub async fn fetch(path: PathBuf) -> Option<Handle> {
    match load(path).await {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("⚠️  {e}");
            None
        }
    }
}
