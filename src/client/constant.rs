pub const SITE_NAME: &str = "NeuralNexus";
pub const SITE_TITLE: &str = "NeuralNexus — Collective intelligence for builders";
pub const SITE_DESCRIPTION: &str = "Connected minds build better futures. Join NeuralNexus.";
pub const SITE_TAGLINE: &str = "Connected minds build better futures. A symbiotic ecosystem for technologists to unite, elevate, and create.";
