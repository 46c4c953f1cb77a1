//! Payment-link query format shared with the payment page

mod link;

pub use link::PaymentLink;
