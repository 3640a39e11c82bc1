mod footer;
mod header;
mod sections;
mod timer_overlay;

pub use footer::Footer;
pub use header::Header;
pub use sections::{AboutSection, HomeSection, RegisterSection, SpeakersSection};
pub use timer_overlay::RegistrationTimer;
