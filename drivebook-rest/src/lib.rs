pub mod auth;
pub mod config;
pub mod errors;
pub mod routes;

pub type AppResult<T> = Result<T, errors::AppError>;

#[macro_export]
macro_rules! create_app {
    ($config:expr, $oauth:expr, $tokens:expr) => {{
        use ::actix_cors::Cors;
        use ::actix_web::{middleware, web::Data, App};
        use ::drivebook_rest::routes;

        App::new()
            .app_data(Data::new($config.clone()))
            .app_data(Data::new($oauth.clone()))
            .app_data(Data::new($tokens.clone()))
            .wrap(Cors::permissive())
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .configure(routes::config)
    }};
}
