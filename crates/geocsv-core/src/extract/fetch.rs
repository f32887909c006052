//! Single HTTP GET of the feature collection, via the curl crate (libcurl).

use std::time::Duration;

use super::ExtractError;

/// Transfer settings. `None` leaves the libcurl default in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
    pub max_redirections: Option<u32>,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            timeout: None,
            max_redirections: None,
            user_agent: concat!("geocsv/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Performs a GET and returns the full response body.
///
/// Follows redirects. Fails on transport errors and on any non-2xx final status.
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn fetch_body(url: &str, opts: &FetchOptions) -> Result<Vec<u8>, ExtractError> {
    url::Url::parse(url).map_err(|source| ExtractError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    let transport = |source: curl::Error| ExtractError::Transport {
        url: url.to_string(),
        source,
    };

    let mut body: Vec<u8> = Vec::new();
    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transport)?;
    easy.get(true).map_err(transport)?;
    easy.follow_location(true).map_err(transport)?;
    easy.useragent(&opts.user_agent).map_err(transport)?;
    if let Some(n) = opts.max_redirections {
        easy.max_redirections(n).map_err(transport)?;
    }
    if let Some(d) = opts.connect_timeout {
        easy.connect_timeout(d).map_err(transport)?;
    }
    if let Some(d) = opts.timeout {
        easy.timeout(d).map_err(transport)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(transport)?;
        transfer.perform().map_err(transport)?;
    }

    let code = easy.response_code().map_err(transport)?;
    if !(200..300).contains(&code) {
        return Err(ExtractError::HttpStatus {
            url: url.to_string(),
            status: code,
        });
    }

    tracing::debug!(url, status = code, bytes = body.len(), "fetched feature collection");
    Ok(body)
}
