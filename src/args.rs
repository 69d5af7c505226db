use clap::Parser;

const PROFILE_URL: &str = "https://api.euro.ocs-software.com/let/cache/let/profiles/200899";
const NEWS_URL: &str = "https://api.rss2json.com/v1/api.json?rss_url=https%3A%2F%2Flive-let.ocs-software.com%2Fblog%2Ftag%2F200899%2Ffeed%2F";
const PHOTOS_URL: &str = "https://api.flickr.com/services/rest/?method=flickr.photos.search&api_key=49ac91a164fcae48f36480a6b7db13a4&extras=url_z,url_l,url_o&per_page=20&text=Ane+Zubiri&user_id=99039037@N06&format=json&nojsoncallback=1";

pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the web server to
    #[arg(long, default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to listen on
    #[arg(short = 'p', long, default_value_t = 8081)]
    pub port: u16,

    /// Tour profile endpoint (JSON converted from the tour's XML feed)
    #[arg(long, default_value = PROFILE_URL)]
    pub profile_url: String,

    /// RSS-to-JSON bridge for the athlete's news feed
    #[arg(long, default_value = NEWS_URL)]
    pub news_url: String,

    /// Photo search endpoint
    #[arg(long, default_value = PHOTOS_URL)]
    pub photos_url: String,
}
