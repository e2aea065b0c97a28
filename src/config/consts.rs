// Net config
pub const URL: &str = "http://www.agricas.fr/menu-au-ria";
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:99.0) Gecko/20100101 Firefox/99.0";
pub const ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";
pub const ACCEPT_LANGUAGE: &str = "fr,fr-FR;q=0.8,en-US;q=0.5,en;q=0.3";

// Output
pub const BASE_WIDTH: usize = 100;
pub const HIGHLIGHT_START: &str = "\x1b[32m";
pub const HIGHLIGHT_END: &str = "\x1b[0m";
pub const SIDES_HEADER: &str = "Accompagnements";
