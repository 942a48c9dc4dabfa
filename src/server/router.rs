use axum::{
    routing::{get, post},
    Router,
};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, follow, ingredient, recipe, tag, user},
    state::AppState,
};

pub const OPENAPI_PATH: &str = "/api/docs/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/api/docs";

#[derive(OpenApi)]
#[openapi(
    info(title = "Foodgram API"),
    paths(
        auth::login,
        auth::logout,
        user::register,
        user::get_users,
        user::get_user,
        user::get_me,
        user::update_me,
        user::set_password,
        follow::subscribe,
        follow::unsubscribe,
        follow::get_subscriptions,
        tag::get_tags,
        tag::get_tag,
        tag::create_tag,
        ingredient::get_ingredients,
        ingredient::get_ingredient,
        ingredient::create_ingredient,
        recipe::get_recipes,
        recipe::create_recipe,
        recipe::get_recipe,
        recipe::update_recipe,
        recipe::delete_recipe,
        recipe::add_favorite,
        recipe::remove_favorite,
        recipe::add_to_shopping_cart,
        recipe::remove_from_shopping_cart,
        recipe::download_shopping_cart,
    ),
    modifiers(&TokenSecurity)
)]
pub struct ApiDoc;

/// Registers the `Authorization: Token <key>` scheme referenced by protected endpoints.
struct TokenSecurity;

impl Modify for TokenSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "token",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization"))),
        );
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/token/login/", post(auth::login))
        .route("/api/auth/token/logout/", post(auth::logout))
        .route("/api/users/", get(user::get_users).post(user::register))
        .route("/api/users/me/", get(user::get_me).patch(user::update_me))
        .route("/api/users/set_password/", post(user::set_password))
        .route("/api/users/subscriptions/", get(follow::get_subscriptions))
        .route("/api/users/{user_id}/", get(user::get_user))
        .route(
            "/api/users/{user_id}/subscribe/",
            post(follow::subscribe).delete(follow::unsubscribe),
        )
        .route("/api/tags/", get(tag::get_tags).post(tag::create_tag))
        .route("/api/tags/{tag_id}/", get(tag::get_tag))
        .route(
            "/api/ingredients/",
            get(ingredient::get_ingredients).post(ingredient::create_ingredient),
        )
        .route(
            "/api/ingredients/{ingredient_id}/",
            get(ingredient::get_ingredient),
        )
        .route(
            "/api/recipes/",
            get(recipe::get_recipes).post(recipe::create_recipe),
        )
        .route(
            "/api/recipes/download_shopping_cart/",
            get(recipe::download_shopping_cart),
        )
        .route(
            "/api/recipes/{recipe_id}/",
            get(recipe::get_recipe)
                .patch(recipe::update_recipe)
                .delete(recipe::delete_recipe),
        )
        .route(
            "/api/recipes/{recipe_id}/favorite/",
            post(recipe::add_favorite).delete(recipe::remove_favorite),
        )
        .route(
            "/api/recipes/{recipe_id}/shopping_cart/",
            post(recipe::add_to_shopping_cart).delete(recipe::remove_from_shopping_cart),
        )
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use test_utils::{builder::TestBuilder, factory};
    use tower::ServiceExt;

    use super::*;

    async fn send(db: &sea_orm::DatabaseConnection, request: Request<Body>) -> Response {
        router()
            .with_state(AppState::new(db.clone()))
            .oneshot(request)
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Tests creating a recipe without an Authorization header.
    ///
    /// Expected: 401 Unauthorized before the body is inspected
    #[tokio::test]
    async fn anonymous_cannot_create_recipe() {
        let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let response = send(
            db,
            Request::builder()
                .method(Method::POST)
                .uri("/api/recipes/")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    /// Tests the public recipe list with and without a token.
    ///
    /// Expected: 200 with the page envelope, 401 for an unknown token
    #[tokio::test]
    async fn lists_recipes() {
        let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::helpers::create_recipe_with_dependencies(db)
            .await
            .unwrap();

        let response = send(
            db,
            Request::get("/api/recipes/?page=1&limit=5")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["results"][0]["is_favorited"], false);

        let response = send(
            db,
            Request::get("/api/recipes/")
                .header(header::AUTHORIZATION, "Token not-a-real-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    /// Tests downloading the shopping list as an authenticated user.
    ///
    /// Expected: 200 with a text attachment, 401 without a token
    #[tokio::test]
    async fn downloads_shopping_cart() {
        let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await.unwrap();
        let token = factory::create_token(db, user.id).await.unwrap();

        let response = send(
            db,
            Request::get("/api/recipes/download_shopping_cart/")
                .header(header::AUTHORIZATION, format!("Token {}", token.key))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("attachment")));

        let response = send(
            db,
            Request::get("/api/recipes/download_shopping_cart/")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    /// Tests logging in with a wrong password over HTTP.
    ///
    /// Expected: 400 Bad Request with an error message
    #[tokio::test]
    async fn login_with_bad_credentials() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await.unwrap();

        let response = send(
            db,
            Request::post("/api/auth/token/login/")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({"email": user.email, "password": "nope"}).to_string(),
                ))
                .unwrap(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
    }

    /// Tests the generated OpenAPI document.
    ///
    /// Expected: 200 with the token security scheme registered
    #[tokio::test]
    async fn serves_openapi_document() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let response = send(db, Request::get(OPENAPI_PATH).body(Body::empty()).unwrap()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["paths"]["/api/recipes/"].is_object());
        assert!(body["components"]["securitySchemes"]["token"].is_object());
    }

    fn authed(method: Method, uri: &str, key: &str, body: Body) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Token {}", key))
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .unwrap()
    }

    /// Tests creating a recipe with a string where a number is expected.
    ///
    /// Expected: 400 Bad Request with a JSON error body instead of a plain text rejection
    #[tokio::test]
    async fn mistyped_body_is_bad_request() {
        let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await.unwrap();
        let token = factory::create_token(db, user.id).await.unwrap();

        for body in [r#"{"cooking_time":"abc","tags":[1]}"#, "{not json"] {
            let response = send(
                db,
                authed(Method::POST, "/api/recipes/", &token.key, Body::from(body)),
            )
            .await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert!(json_body(response).await["error"].is_string());
        }
    }

    /// Tests malformed query parameters on raw and typed query endpoints.
    ///
    /// Expected: 400 Bad Request with a JSON error body for each
    #[tokio::test]
    async fn malformed_query_is_bad_request() {
        let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await.unwrap();
        let token = factory::create_token(db, user.id).await.unwrap();

        for uri in [
            "/api/recipes/?is_favorited=maybe",
            "/api/recipes/?page=first",
            "/api/users/subscriptions/?recipes_limit=x",
        ] {
            let response = send(db, authed(Method::GET, uri, &token.key, Body::empty())).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
            assert!(json_body(response).await["error"].is_string());
        }
    }

    /// Tests a non-numeric id in the recipe path.
    ///
    /// Expected: 404 Not Found with a JSON error body
    #[tokio::test]
    async fn non_numeric_id_is_not_found() {
        let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let response = send(db, Request::get("/api/recipes/abc/").body(Body::empty()).unwrap()).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(json_body(response).await["error"].is_string());
    }

    /// Tests requesting the largest possible page number.
    ///
    /// Expected: 200 with an empty page and the real total instead of an offset overflow
    #[tokio::test]
    async fn huge_page_is_empty() {
        let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::helpers::create_recipe_with_dependencies(db)
            .await
            .unwrap();

        let response = send(
            db,
            Request::get(format!("/api/recipes/?page={}&limit=100", u64::MAX))
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["results"].as_array().map(Vec::len), Some(0));
        assert!(body["next"].is_null());
    }

    /// Tests favoriting a recipe and subscribing to its author twice.
    ///
    /// Expected: 201 the first time, 400 with an error body the second time
    #[tokio::test]
    async fn duplicate_favorite_and_subscription() {
        let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (author, _, _, recipe) = factory::helpers::create_recipe_with_dependencies(db)
            .await
            .unwrap();
        let user = factory::create_user(db).await.unwrap();
        let token = factory::create_token(db, user.id).await.unwrap();

        for uri in [
            format!("/api/recipes/{}/favorite/", recipe.id),
            format!("/api/users/{}/subscribe/", author.id),
        ] {
            let first = send(db, authed(Method::POST, &uri, &token.key, Body::empty())).await;
            assert_eq!(first.status(), StatusCode::CREATED, "{}", uri);

            let second = send(db, authed(Method::POST, &uri, &token.key, Body::empty())).await;
            assert_eq!(second.status(), StatusCode::BAD_REQUEST, "{}", uri);
            assert!(json_body(second).await["error"].is_string());
        }
    }
}
