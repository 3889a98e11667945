//! Parser for the raw `key=value` parameters of a list request.
//!
//! Recognized parameters:
//! - `page`: page whose sub pages are listed (a leading bare value also counts)
//! - `intro`: text placed before the list
//! - `default`: text when there are no sub pages, `-` for no output at all
//! - `showpage`: include the page itself (yes/no)
//! - `limit`: maximum number of sub pages, non-negative
//! - `wrap`: enclose the list in a container (yes/no)

use tracing::{debug, warn};

use crate::application::renderer::{Fallback, RenderOptions};
use crate::application::{ApplicationError, ApplicationResult};

/// `default` value that suppresses output for pages without sub pages.
pub const NO_OUTPUT_SENTINEL: &str = "-";

/// A parsed list request: the raw target title plus its render options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub page: String,
    pub options: RenderOptions,
}

/// Parses raw parameters on top of `defaults`.
pub fn parse_params<S: AsRef<str>>(
    raw: &[S],
    defaults: &RenderOptions,
) -> ApplicationResult<ListRequest> {
    let mut page: Option<String> = None;
    let mut options = defaults.clone();

    for (position, param) in raw.iter().enumerate() {
        let param = param.as_ref();
        let Some((key, value)) = param.split_once('=') else {
            if position == 0 && page.is_none() {
                page = Some(param.trim().to_string());
            } else {
                warn!("ignoring parameter without name: {:?}", param);
            }
            continue;
        };

        let value = value.trim();
        match key.trim().to_lowercase().as_str() {
            "page" => page = Some(value.to_string()),
            "intro" => options.intro = value.to_string(),
            "default" => {
                options.fallback = if value == NO_OUTPUT_SENTINEL {
                    Fallback::Nothing
                } else {
                    Fallback::Text(value.to_string())
                }
            }
            "showpage" => options.include_root = parse_bool("showpage", value)?,
            "limit" => options.max_entries = parse_limit(value)?,
            "wrap" => options.wrap = parse_bool("wrap", value)?,
            other => warn!("ignoring unknown parameter: {}", other),
        }
    }

    let page = page
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApplicationError::invalid_parameter("page", "missing required parameter"))?;

    debug!("parse_params: page={:?} options={:?}", page, options);
    Ok(ListRequest { page, options })
}

/// Parses a yes/no style flag.
pub fn parse_bool(name: &str, value: &str) -> ApplicationResult<bool> {
    match value.to_lowercase().as_str() {
        "yes" | "true" | "on" | "1" => Ok(true),
        "no" | "false" | "off" | "0" => Ok(false),
        _ => Err(ApplicationError::invalid_parameter(
            name,
            format!("expected yes or no, got {:?}", value),
        )),
    }
}

/// Parses a sub page limit; empty means unlimited.
pub fn parse_limit(value: &str) -> ApplicationResult<Option<usize>> {
    if value.is_empty() {
        return Ok(None);
    }
    let limit: i64 = value.parse().map_err(|_| {
        ApplicationError::invalid_parameter("limit", format!("not a number: {:?}", value))
    })?;
    usize::try_from(limit)
        .map(Some)
        .map_err(|_| ApplicationError::invalid_parameter("limit", "must not be negative"))
}
