// Minimal HTML for the two pages the gate redirects between.

use axum::{http::StatusCode, response::Html};

const LOGIN_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Promptloom · Sign in</title></head>
<body>
  <main>
    <h1>Promptloom</h1>
    <form method="post" action="/login">
      <label for="password">Password</label>
      <input id="password" name="password" type="password" autocomplete="current-password" required>
      <button type="submit">Sign in</button>
    </form>
  </main>
</body>
</html>"#;

const HOME_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Promptloom</title></head>
<body>
  <main>
    <h1>Promptloom</h1>
    <p>Essay prompt recommendations are served from <code>POST /api/recommend</code>,
       resource search from <code>GET /api/search?q=</code>.</p>
    <p><a href="/logout">Sign out</a></p>
  </main>
</body>
</html>"#;

/// GET /login
pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}

/// GET /
pub async fn home_page() -> Html<&'static str> {
    Html(HOME_PAGE)
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
