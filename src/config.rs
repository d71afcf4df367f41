#[cfg(debug_assertions)]
pub fn get_contact_webhook_url() -> &'static str {
    "http://localhost:5678/webhook/portfolio-contact"  // Local n8n instance
}

#[cfg(not(debug_assertions))]
pub fn get_contact_webhook_url() -> &'static str {
    "https://n8n.armandosaboia.tech/webhook/portfolio-contact"
}

macro_rules! contact_email {
    () => {
        "armando.saboia.tech@gmail.com"
    };
}

pub const CONTACT_EMAIL: &str = contact_email!();
pub const MAILTO: &str = concat!("mailto:", contact_email!());
pub const CONTACT_MESSAGE: &str = "User clicked the contact CTA from portfolio site";
pub const CONTACT_SOURCE: &str = "portfolio";

pub const GITHUB_URL: &str = "https://github.com/ArmandoSaboia";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/armandosaboia/";
pub const OWNER_NAME: &str = "Armando Saboia";
pub const HERO_PHOTO: &str = "/preview-Photoroom.png";

// Scroll choreography
pub const RETURN_TO_TOP_THRESHOLD: f64 = 300.0;
pub const PARALLAX_MAX_OFFSET: f64 = -40.0;

// Background particles
pub const PARTICLE_COUNT: usize = 70;
pub const PARTICLE_MIN_RADIUS: f64 = 1.0;
pub const PARTICLE_MAX_RADIUS: f64 = 3.0;
pub const PARTICLE_MAX_SPEED: f64 = 0.2; // per axis, per frame
pub const PARTICLE_FILL: &str = "rgba(255,255,255,0.06)";

// Project cards fade in one after another
pub const CARD_STAGGER_MS: u32 = 60;
// Share of an element that must be on screen before it is revealed
pub const REVEAL_VISIBLE_FRACTION: f64 = 0.2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_targets_the_contact_address() {
        assert_eq!(MAILTO, format!("mailto:{}", CONTACT_EMAIL));
        assert_eq!(MAILTO.matches('@').count(), 1);
    }
}
