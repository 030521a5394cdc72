//! Share-link helpers around [`compress`](crate::compress).

use crate::codec::{compress, decompress, SharePayload};
use crate::error::{DecodeError, Result};
use combo_core::ShareConfig;

/// Build `{origin}/?{param}={compressed}`.
pub fn share_url(origin: &str, payload: &SharePayload, config: &ShareConfig) -> String {
    format!(
        "{}/?{}={}",
        origin.trim_end_matches('/'),
        config.query_param,
        compress(payload)
    )
}

/// Extract the compressed payload from a share URL's query string.
pub fn share_param<'a>(url: &'a str, config: &ShareConfig) -> Option<&'a str> {
    let query = url.split_once('?')?.1;
    let query = query.split('#').next().unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == config.query_param)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

pub fn decode_share_url(url: &str, config: &ShareConfig) -> Result<SharePayload> {
    let param = share_param(url, config)
        .ok_or_else(|| DecodeError::MissingParam(config.query_param.clone()))?;
    decompress(param)
}
