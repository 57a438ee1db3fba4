mod app;
mod config;

mod domain {
    pub mod entities {
        pub mod census;
        pub mod filter;
        pub mod page;
    }
}

mod infra {
    pub mod http {
        pub mod census_client;
    }
}

mod platform {
    #[cfg(feature = "desktop")]
    pub mod desktop {
        pub mod webview;
    }
    pub mod logging;
}

mod ui {
    pub mod state {
        pub mod app_state;
        pub mod view_model;
    }
}

mod usecase {
    pub mod ports {
        pub mod census_source;
    }
    pub mod services {
        pub mod query_service;
    }
    pub mod state_machine;
}


fn main() {
    platform::logging::init();
    launch_viewer();
}

#[cfg(feature = "desktop")]
fn launch_viewer() {
    let webview_data_dir = platform::desktop::webview::default_webview_data_dir()
        .expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Census Income"))
                .with_data_directory(webview_data_dir),
        )
        .launch(app::App);
}

#[cfg(not(feature = "desktop"))]
fn launch_viewer() {
    dioxus::launch(app::App);
}
