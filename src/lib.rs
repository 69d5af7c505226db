pub mod args;
pub mod model {
    pub mod content;
    pub mod nav;
    pub mod profile;
    pub mod scalar;
}
pub mod controller {
    pub mod news;
    pub mod pages;
    pub mod photos;
    pub mod profile;
}
pub mod view {
    pub mod career;
    pub mod contact;
    pub mod index;
    pub mod layout;
    pub mod news;
    pub mod stats;
}

pub const SITE_NAME: &str = "Ane Zubiri";
pub const TARGET_TOUR: &str = "LET";
