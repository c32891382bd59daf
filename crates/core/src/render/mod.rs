//! View models projected from game records.
//!
//! Renderers are pure: they take records (and view state) and return
//! serializable structs. Turning those into markup is the client's job.

pub mod carousel;
pub mod detail;
pub mod grid;
pub mod landing;
pub mod media;
pub mod page;

use serde::Serialize;

/// Label shown for free games in the detail and featured views.
pub const FREE_TO_PLAY: &str = "Free to Play";

/// Price as shown by the detail and featured views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceLabel {
    pub text: String,
    /// Set for free games so the client can style them apart.
    pub free: bool,
}

impl PriceLabel {
    /// `0` renders as "Free to Play"; anything else as `$` with two decimals.
    pub fn for_price(price: f64) -> Self {
        if price == 0.0 {
            Self {
                text: FREE_TO_PLAY.to_string(),
                free: true,
            }
        } else {
            Self {
                text: format!("${price:.2}"),
                free: false,
            }
        }
    }
}

/// Grid card price: `$` followed by the plain number, no free-game wording
/// and no fixed decimals (`0` is `$0`, `20` is `$20`).
pub fn plain_price(price: f64) -> String {
    format!("${price}")
}
