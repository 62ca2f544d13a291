pub const BRAND_NAME: &str = "Corelytica";

pub fn get_repo_url() -> &'static str {
    "https://github.com/rajaakram/Website-Corelytica"
}
