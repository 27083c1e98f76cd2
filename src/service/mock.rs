use rand::Rng;

use crate::service::error::ClassifyError;
use crate::service::outcome::Outcome;

/// Fixture provider used when no endpoint is deployed.
///
/// Recognizes two magic codes: `SSR` always wins and `ERROR` always fails
/// the attempt. Every other code accrues a point against a rolled total.
pub struct MockClassifier;

impl MockClassifier {
    pub fn classify(&self, code: &str) -> Result<Outcome, ClassifyError> {
        match code {
            "SSR" => Ok(Outcome::Win {
                prize_name: "アルマンド・ゴールド".to_string(),
            }),
            "ERROR" => Err(ClassifyError::Rejected {
                message: "無効なコードです".to_string(),
            }),
            _ => Ok(Outcome::Lose {
                points_added: 1,
                current_points: rand::thread_rng().gen_range(0..40),
                target_points: 50,
            }),
        }
    }
}
