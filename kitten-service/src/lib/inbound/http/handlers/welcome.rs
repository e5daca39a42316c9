use axum::response::Html;

const WELCOME_PAGE: &str = r#"
<h1>Welcome to Cyber Kittens!</h1>
<p>Cats are available at <a href="/kittens/1">/kittens/:id</a></p>
<p>Create a new cat at <b><code>POST /kittens</code></b> and delete one at <b><code>DELETE /kittens/:id</code></b></p>
<p>Log in via POST /login or register via POST /register</p>
"#;

pub async fn welcome() -> Html<&'static str> {
    Html(WELCOME_PAGE)
}
