//! Affiliate 推广申请的生命周期

mod book;
mod models;

pub use book::ApplicationBook;
pub use models::{AffiliateOffer, ApplicationStatus};
