#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::sync::Arc;

    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::{
        app::*,
        pages::{static_paths, Route},
        portfolio::Portfolio,
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // bad content should stop the server before it binds
    let portfolio = Arc::new(Portfolio::embedded()?);
    let paths = static_paths(&portfolio);
    for path in paths.iter().filter(|p| Route::parse(p) == Route::NotFound) {
        tracing::warn!(path = %path, "static path does not match a route");
    }
    tracing::info!(count = paths.len(), "prerenderable paths");

    let conf = get_configuration(None)?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let context = {
        let portfolio = portfolio.clone();
        move || provide_context(portfolio.clone())
    };

    let app = Router::new()
        .leptos_routes_with_context(&leptos_options, routes, context.clone(), {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler_with_context(
            context, shell,
        ))
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
