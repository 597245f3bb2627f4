//! Blocking retrieval of the regulations page.

use std::io::Read;

use log::info;

use crate::error::{Error, Result};
use crate::util::decode_text;

/// GET `url` and decode the body using the response charset.
pub fn fetch_document(url: &str) -> Result<String> {
    info!("fetching {url}");

    let response = match ureq::get(url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(status, _)) => {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status,
            });
        }
        Err(err) => return Err(Box::new(err).into()),
    };

    let charset = response.charset().to_string();
    let mut bytes = Vec::new();
    response.into_reader().read_to_end(&mut bytes)?;
    info!("received {} bytes ({charset})", bytes.len());

    Ok(decode_text(&bytes, Some(&charset)).into_owned())
}
