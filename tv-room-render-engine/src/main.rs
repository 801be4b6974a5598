use engine::core::app_setup::create_app;

mod engine;
mod rpc;

fn main() {
    let mut app = match create_app() {
        Ok(app) => app,
        Err(err) => panic!("TV room startup failed: {err}"),
    };

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}
