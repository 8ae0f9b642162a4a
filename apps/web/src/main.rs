fn main() {
    folio_web::WebApp::new().launch();
}
