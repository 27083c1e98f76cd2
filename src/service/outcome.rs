//! Wire contract and domain result for the classification service.
//!
//! The service is deliberately tolerant: any field may be missing from the
//! payload, and every missing field has a fixed default so the reveal never
//! fails on a partially populated response.

use serde::Deserialize;

pub const DEFAULT_PRIZE_NAME: &str = "高級シャンパン";
pub const DEFAULT_POINTS_ADDED: u32 = 1;
pub const DEFAULT_CURRENT_POINTS: u32 = 10;
pub const DEFAULT_TARGET_POINTS: u32 = 50;

/// Raw response body, camelCase on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub prize_name: Option<String>,
    #[serde(default)]
    pub points_added: Option<u32>,
    #[serde(default)]
    pub current_points: Option<u32>,
    #[serde(default)]
    pub target_points: Option<u32>,
}

/// Resolved classification for one redemption attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Win {
        prize_name: String,
    },
    Lose {
        points_added: u32,
        current_points: u32,
        target_points: u32,
    },
}

impl From<ClassifyResponse> for Outcome {
    fn from(raw: ClassifyResponse) -> Self {
        match raw.status.as_deref() {
            Some("win") => Outcome::Win {
                prize_name: raw
                    .prize_name
                    .unwrap_or_else(|| DEFAULT_PRIZE_NAME.to_string()),
            },
            status => {
                if !matches!(status, Some("lose")) {
                    tracing::warn!(?status, "unknown classification status, treated as lose");
                }
                Outcome::Lose {
                    points_added: raw.points_added.unwrap_or(DEFAULT_POINTS_ADDED),
                    current_points: raw.current_points.unwrap_or(DEFAULT_CURRENT_POINTS),
                    // A zero target would make the gauge ratio undefined.
                    target_points: raw
                        .target_points
                        .filter(|target| *target > 0)
                        .unwrap_or(DEFAULT_TARGET_POINTS),
                }
            }
        }
    }
}

/// Gauge fill toward the point target, clamped to [0, 100].
pub fn gauge_percent(current_points: u32, target_points: u32) -> f64 {
    ((current_points as f64 / target_points as f64) * 100.0).min(100.0)
}

/// Points still missing before the threshold prize, clamped at zero.
pub fn points_remaining(current_points: u32, target_points: u32) -> u32 {
    target_points.saturating_sub(current_points)
}
