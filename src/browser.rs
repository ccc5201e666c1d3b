use tracing::info;

use crate::error::{Error, Result};

/// Only web links are handed to the browser; API data decides the URL.
fn followable(url: &str) -> Result<&str> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url)
    } else {
        Err(Error::Browser(url.to_owned()))
    }
}

/// Hand a link to the platform's default browser without waiting for it.
pub fn open_link(url: &str) -> Result<()> {
    let url = followable(url)?;
    info!(%url, "opening link");
    open::that_detached(url)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_web_links_are_opened() {
        assert!(matches!(open_link("#"), Err(Error::Browser(url)) if url == "#"));
        assert!(matches!(
            open_link("file:///etc/passwd"),
            Err(Error::Browser(_))
        ));
        assert!(matches!(
            open_link("cmd.exe /C calc"),
            Err(Error::Browser(_))
        ));
    }

    #[test]
    fn preview_links_pass_through_whole() {
        let preview = "http://books.google.com/books?id=x&printsec=frontcover&dq=isbn:978&source=gbs_api";
        assert_eq!(followable(preview).expect("a web link"), preview);
    }
}
