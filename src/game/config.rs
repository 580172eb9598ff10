//! Game configuration from command-line options.

use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rand::rngs::StdRng;

use crate::ai::RandomJitter;
use crate::board::Color;

/// Default pause before the computer answers, in milliseconds.
pub const DEFAULT_AI_DELAY_MS: u64 = 800;

/// Error type for command-line option parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Option not recognised
    UnknownOption { option: String },
    /// Option given without its value
    MissingValue { option: String },
    /// Option value could not be parsed
    InvalidValue { option: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownOption { option } => write!(f, "Unknown option '{option}'"),
            ConfigError::MissingValue { option } => write!(f, "Option '{option}' needs a value"),
            ConfigError::InvalidValue { option, value } => {
                write!(f, "Invalid value '{value}' for option '{option}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Who plays which side, how long the computer pauses and how it is seeded.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// Side controlled by the person at the keyboard
    pub human_color: Color,
    /// Pause before the computer plays its move
    pub ai_delay: Duration,
    /// Fixed seed for the computer's jitter, or `None` for entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            human_color: Color::White,
            ai_delay: Duration::from_millis(DEFAULT_AI_DELAY_MS),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse `--human white|black`, `--delay-ms N` and `--seed N`.
    ///
    /// `args` excludes the program name. Options may appear in any order;
    /// later occurrences win.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = GameConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let option = arg.as_ref().to_string();
            let mut value = || {
                args.next()
                    .map(|v| v.as_ref().to_string())
                    .ok_or_else(|| ConfigError::MissingValue {
                        option: option.clone(),
                    })
            };
            match option.as_str() {
                "--human" => {
                    let v = value()?;
                    config.human_color = parse_color(&v).ok_or(ConfigError::InvalidValue {
                        option: option.clone(),
                        value: v,
                    })?;
                }
                "--delay-ms" => {
                    let v = value()?;
                    let ms = v.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                        option: option.clone(),
                        value: v.clone(),
                    })?;
                    config.ai_delay = Duration::from_millis(ms);
                }
                "--seed" => {
                    let v = value()?;
                    let seed = v.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                        option: option.clone(),
                        value: v.clone(),
                    })?;
                    config.seed = Some(seed);
                }
                _ => return Err(ConfigError::UnknownOption { option }),
            }
        }

        Ok(config)
    }

    /// Side the computer plays.
    #[inline]
    #[must_use]
    pub fn ai_color(&self) -> Color {
        self.human_color.opponent()
    }

    /// Jitter source for the computer, seeded as configured.
    #[must_use]
    pub fn jitter(&self) -> RandomJitter<StdRng> {
        match self.seed {
            Some(seed) => RandomJitter::seeded(seed),
            None => RandomJitter::from_entropy(),
        }
    }
}

fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "white" | "w" => Some(Color::White),
        "black" | "b" => Some(Color::Black),
        _ => None,
    }
}
