use actix_web::{middleware, web, App, HttpResponse, HttpServer, Responder};

use serde::Deserialize;

mod cnf;

const BIND_ADDR: (&str, u16) = ("127.0.0.1", 7000);

#[derive(Deserialize)]
struct ParseForm {
    formula: String,
    params: Option<String>,
}

async fn index() -> impl Responder {
    HttpResponse::Ok().body(
        "Normalform API Server

Available endpoints:
/parse /equivalent /tseytin /convert",
    )
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/parse", web::post().to(cnf::parse))
        .route("/equivalent", web::post().to(cnf::equivalent))
        .route("/tseytin", web::post().to(cnf::tseytin))
        .route("/convert", web::post().to(cnf::convert));
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    log::info!("Listening on {}:{}", BIND_ADDR.0, BIND_ADDR.1);

    HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(middleware::DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*")))
            .configure(routes)
    })
    .bind(BIND_ADDR)?
    .run()
    .await
}
