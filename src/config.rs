use std::env;

use anyhow::{bail, Context};

use crate::db::DEFAULT_ROOM_COUNT;

pub struct Config {
    pub default_room_count: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let raw = match env::var("HOTEL_DEFAULT_ROOM_COUNT") {
            Ok(raw) => Some(raw),
            Err(env::VarError::NotPresent) => None,
            Err(e) => return Err(e).context("reading HOTEL_DEFAULT_ROOM_COUNT"),
        };

        Ok(Self {
            default_room_count: parse_room_count(raw.as_deref())?,
        })
    }
}

fn parse_room_count(raw: Option<&str>) -> anyhow::Result<usize> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_ROOM_COUNT);
    };

    let count: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("HOTEL_DEFAULT_ROOM_COUNT={raw:?} is not a number"))?;
    if count == 0 {
        bail!("HOTEL_DEFAULT_ROOM_COUNT must be at least 1");
    }
    Ok(count)
}
