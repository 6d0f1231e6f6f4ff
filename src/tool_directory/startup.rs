use actix_session::SessionMiddleware;
use actix_web::{dev::Server, middleware::Compress, web::Data, App, HttpServer};
use common::{db::init_db, redis::init_redis_pool, settings::types::Settings};
use server::{get_preps_for_redis_session_store, get_routes, setup_session_middleware_builder};
use web_adapters::{auth_middleware::AuthenticateUser, Mailer};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, std::io::Error> {
        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );

        let listener = std::net::TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, settings).await?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

async fn run(listener: std::net::TcpListener, settings: Settings) -> Result<Server, std::io::Error> {
    let db = init_db(&settings).await.map_err(|e| {
        tracing::event!(target: "backend", tracing::Level::ERROR, "Failed to open DB connection: {:?}", e);
        std::io::Error::other(e)
    })?;
    let redis_pool = init_redis_pool(&settings).map_err(|e| {
        tracing::event!(target: "backend", tracing::Level::ERROR, "Cannot create deadpool redis: {:?}", e);
        std::io::Error::other(e)
    })?;
    let mailer = Mailer::from_settings(&settings).map_err(std::io::Error::other)?;
    let (redis_store, secret_key) = get_preps_for_redis_session_store(&settings)
        .await
        .map_err(std::io::Error::other)?;

    let db = Data::new(db);
    let redis_pool = Data::new(redis_pool);
    let mailer = Data::new(mailer);
    let settings = Data::new(settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(AuthenticateUser)
            .wrap(
                setup_session_middleware_builder(
                    SessionMiddleware::builder(redis_store.clone(), secret_key.clone()),
                    &settings,
                )
                .build(),
            )
            .service(get_routes())
            .app_data(db.clone())
            .app_data(redis_pool.clone())
            .app_data(mailer.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
