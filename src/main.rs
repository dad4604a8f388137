mod config;
mod dom_render;
mod file_intake;
mod hash_route;
mod local_store;
mod quiz_app;
mod shell_app;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Page {
    Shell,
    Generator,
}

impl Page {
    fn from_marker(marker: Option<&str>) -> Self {
        match marker.map(str::trim) {
            Some("generator") => Page::Generator,
            _ => Page::Shell,
        }
    }
}

fn current_page() -> Page {
    let marker = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .and_then(|body| body.get_attribute("data-app"));
    Page::from_marker(marker.as_deref())
}

fn main() {
    let page = current_page();
    gloo::console::log!("queryquill: booting", format!("{page:?}"));
    match page {
        Page::Generator => {
            yew::Renderer::<quiz_app::QuizApp>::new().render();
        }
        Page::Shell => shell_app::mount(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn page_marker_defaults_to_shell() {
        assert_eq!(Page::from_marker(None), Page::Shell);
        assert_eq!(Page::from_marker(Some("shell")), Page::Shell);
        assert_eq!(Page::from_marker(Some("unknown")), Page::Shell);
        assert_eq!(Page::from_marker(Some(" generator ")), Page::Generator);
    }
}
