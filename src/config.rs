use std::env;

use anyhow::Result;
use clap::ValueEnum;

use crate::matching::matcher::{FrameMatcher, RollingMatcher};

/// Default minimum match length, in words.
pub const DEFAULT_FRAME_SIZE: usize = 11;

/// Highlight colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scheme {
    /// Reference yellow, sample magenta, quotes cyan
    Cmyk,
    /// Reference green, sample red, quotes blue
    Rgb,
}

/// Which frame matcher backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MatcherBackend {
    /// Single-threaded rolling run-length matcher (default)
    Rolling,
    /// Row-parallel matcher on the rayon pool (requires the `parallel` feature)
    Parallel,
}

/// Configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// value has a default and every value can be overridden on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub frame_size: usize,
    /// Highlight quoted matches in their own colour
    pub quotes: bool,
    pub scheme: Scheme,
    pub matcher: MatcherBackend,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_size: DEFAULT_FRAME_SIZE,
            quotes: true,
            scheme: Scheme::Cmyk,
            matcher: MatcherBackend::Rolling,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let frame_size = match lookup("COPYCHECK_FRAME_SIZE") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                anyhow::anyhow!("COPYCHECK_FRAME_SIZE must be a whole number, got {raw:?}")
            })?,
            None => defaults.frame_size,
        };

        let quotes = match lookup("COPYCHECK_QUOTES") {
            Some(raw) => match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "y" | "on" => true,
                "0" | "false" | "no" | "n" | "off" => false,
                _ => anyhow::bail!("COPYCHECK_QUOTES must be true or false, got {raw:?}"),
            },
            None => defaults.quotes,
        };

        let scheme = match lookup("COPYCHECK_SCHEME") {
            Some(raw) => Scheme::from_str(raw.trim(), true).map_err(|_| {
                anyhow::anyhow!("COPYCHECK_SCHEME must be `cmyk` or `rgb`, got {raw:?}")
            })?,
            None => defaults.scheme,
        };

        let matcher = match lookup("COPYCHECK_MATCHER") {
            Some(raw) => MatcherBackend::from_str(raw.trim(), true).map_err(|_| {
                anyhow::anyhow!("COPYCHECK_MATCHER must be `rolling` or `parallel`, got {raw:?}")
            })?,
            None => defaults.matcher,
        };

        Ok(Self {
            frame_size,
            quotes,
            scheme,
            matcher,
        })
    }
}

/// Create the frame matcher for a backend.
pub fn create_matcher(backend: MatcherBackend) -> Result<Box<dyn FrameMatcher>> {
    match backend {
        MatcherBackend::Rolling => Ok(Box::new(RollingMatcher)),
        #[cfg(feature = "parallel")]
        MatcherBackend::Parallel => Ok(Box::new(crate::matching::matcher::ParallelMatcher)),
        #[cfg(not(feature = "parallel"))]
        MatcherBackend::Parallel => anyhow::bail!(
            "The parallel matcher is not compiled in.\n\
             Rebuild with: cargo build --features parallel"
        ),
    }
}
