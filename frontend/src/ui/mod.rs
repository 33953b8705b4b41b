use crate::config::SiteConfig;

pub mod menu;
pub mod navbar;
pub mod smooth_scroll;

pub fn init(config: &SiteConfig) {
    menu::init_mobile_menu();
    smooth_scroll::init_smooth_scroll(config.navbar.offset);
    navbar::init_navbar_scroll(&config.navbar);
}
