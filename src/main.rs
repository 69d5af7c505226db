use fairway_site::args;
use fairway_site::controller::pages::{career_page, contact_page, index_page, news_page, stats_page};
use fairway_site::controller::profile::client::ProfileClient;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();
    let bind_addr = format!("{}:{}", args.bind, args.port);
    let profile_client = ProfileClient::new(args.profile_url.clone());
    let args_for_web = args.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(profile_client.clone()))
            .app_data(Data::new(args_for_web.clone()))
            .route("/", web::get().to(index_page))
            .route("/career", web::get().to(career_page))
            .route("/news", web::get().to(news_page))
            .route("/stats", web::get().to(stats_page))
            .route("/contact", web::get().to(contact_page))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", "./static")) // Serve the static files
    })
    .bind(bind_addr)?
    .run()
    .await?;
    Ok(())
}
