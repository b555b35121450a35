//! API docs handler
//!
//! Serves the endpoint catalogue the storefront's docs page renders.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    pub example: String,
    pub response: Value,
    pub requires_auth: bool,
}

#[derive(Debug, Serialize)]
pub struct DocsResponse {
    pub version: &'static str,
    pub endpoints: Vec<Endpoint>,
}

/// GET /api/docs
pub async fn get_docs(State(state): State<AppState>) -> Json<DocsResponse> {
    Json(DocsResponse {
        version: env!("CARGO_PKG_VERSION"),
        endpoints: endpoints(&format!("localhost:{}", state.config.port)),
    })
}

fn endpoints(host: &str) -> Vec<Endpoint> {
    let user = json!({ "id": 2, "name": "pizza diner", "email": "d@jwt.com", "roles": [{ "role": "diner" }] });

    vec![
        Endpoint {
            method: "POST",
            path: "/api/auth",
            description: "Register a new user",
            example: format!(
                r#"curl -X POST {}/api/auth -d '{{"name":"pizza diner", "email":"d@jwt.com", "password":"diner"}}' -H 'Content-Type: application/json'"#,
                host
            ),
            response: json!({ "user": user, "token": "tttttt" }),
            requires_auth: false,
        },
        Endpoint {
            method: "PUT",
            path: "/api/auth",
            description: "Login existing user",
            example: format!(
                r#"curl -X PUT {}/api/auth -d '{{"email":"a@jwt.com", "password":"admin"}}' -H 'Content-Type: application/json'"#,
                host
            ),
            response: json!({ "user": { "id": 1, "name": "常用名字", "email": "a@jwt.com", "roles": [{ "role": "admin" }] }, "token": "tttttt" }),
            requires_auth: false,
        },
        Endpoint {
            method: "DELETE",
            path: "/api/auth",
            description: "Logout a user",
            example: format!(
                "curl -X DELETE {}/api/auth -H 'Authorization: Bearer tttttt'",
                host
            ),
            response: json!({ "message": "logout successful" }),
            requires_auth: true,
        },
        Endpoint {
            method: "GET",
            path: "/api/user/me",
            description: "Get authenticated user",
            example: format!("curl -X GET {}/api/user/me -H 'Authorization: Bearer tttttt'", host),
            response: user.clone(),
            requires_auth: true,
        },
        Endpoint {
            method: "GET",
            path: "/api/user",
            description: "List all users",
            example: format!("curl -X GET {}/api/user -H 'Authorization: Bearer tttttt'", host),
            response: json!({ "2": user }),
            requires_auth: true,
        },
        Endpoint {
            method: "GET",
            path: "/api/user/:userId",
            description: "Get a user",
            example: format!("curl -X GET {}/api/user/2 -H 'Authorization: Bearer tttttt'", host),
            response: user.clone(),
            requires_auth: true,
        },
        Endpoint {
            method: "PUT",
            path: "/api/user/:userId",
            description: "Update user",
            example: format!(
                r#"curl -X PUT {}/api/user/2 -d '{{"name":"pizza dinerx"}}' -H 'Content-Type: application/json' -H 'Authorization: Bearer tttttt'"#,
                host
            ),
            response: json!({ "user": user, "token": "tttttt" }),
            requires_auth: true,
        },
        Endpoint {
            method: "DELETE",
            path: "/api/user/:userId",
            description: "Delete user",
            example: format!("curl -X DELETE {}/api/user/2 -H 'Authorization: Bearer tttttt'", host),
            response: json!({ "message": "user deleted" }),
            requires_auth: true,
        },
        Endpoint {
            method: "GET",
            path: "/api/franchise?page=0&limit=10&name=*",
            description: "List all the franchises",
            example: format!("curl {}/api/franchise", host),
            response: json!({ "franchises": [{ "id": 2, "name": "LotaPizza", "stores": [{ "id": 4, "name": "Lehi" }] }], "more": false }),
            requires_auth: false,
        },
        Endpoint {
            method: "GET",
            path: "/api/franchise/:userId",
            description: "List a user's franchises",
            example: format!("curl {}/api/franchise/1 -H 'Authorization: Bearer tttttt'", host),
            response: json!([{ "id": 2, "name": "LotaPizza", "admins": [{ "id": 1, "name": "常用名字", "email": "a@jwt.com" }], "stores": [] }]),
            requires_auth: true,
        },
        Endpoint {
            method: "POST",
            path: "/api/franchise",
            description: "Create a new franchise",
            example: format!(
                r#"curl -X POST {}/api/franchise -H 'Content-Type: application/json' -H 'Authorization: Bearer tttttt' -d '{{"name": "pizzaPocket", "admins": [{{"email": "f@jwt.com"}}]}}'"#,
                host
            ),
            response: json!({ "id": 5, "name": "pizzaPocket", "admins": [{ "id": 4, "name": "pizza franchisee", "email": "f@jwt.com" }], "stores": [] }),
            requires_auth: true,
        },
        Endpoint {
            method: "DELETE",
            path: "/api/franchise/:franchiseId",
            description: "Delete a franchise",
            example: format!("curl -X DELETE {}/api/franchise/5 -H 'Authorization: Bearer tttttt'", host),
            response: json!({ "message": "franchise deleted" }),
            requires_auth: true,
        },
        Endpoint {
            method: "POST",
            path: "/api/franchise/:franchiseId/store",
            description: "Create a new franchise store",
            example: format!(
                r#"curl -X POST {}/api/franchise/5/store -H 'Content-Type: application/json' -d '{{"name":"SLC"}}' -H 'Authorization: Bearer tttttt'"#,
                host
            ),
            response: json!({ "id": 8, "name": "SLC", "totalRevenue": 0 }),
            requires_auth: true,
        },
        Endpoint {
            method: "DELETE",
            path: "/api/franchise/:franchiseId/store/:storeId",
            description: "Delete a store",
            example: format!("curl -X DELETE {}/api/franchise/5/store/8 -H 'Authorization: Bearer tttttt'", host),
            response: json!({ "message": "store deleted" }),
            requires_auth: true,
        },
        Endpoint {
            method: "GET",
            path: "/api/order/menu",
            description: "Get the pizza menu",
            example: format!("curl {}/api/order/menu", host),
            response: json!([{ "id": 1, "title": "Veggie", "image": "pizza1.png", "price": 0.0038, "description": "A garden of delight" }]),
            requires_auth: false,
        },
        Endpoint {
            method: "GET",
            path: "/api/order",
            description: "Get the orders for the authenticated user",
            example: format!("curl -X GET {}/api/order -H 'Authorization: Bearer tttttt'", host),
            response: json!({ "dinerId": 2, "orders": [], "page": 1 }),
            requires_auth: true,
        },
        Endpoint {
            method: "POST",
            path: "/api/order",
            description: "Create an order for the authenticated user",
            example: format!(
                r#"curl -X POST {}/api/order -H 'Content-Type: application/json' -d '{{"franchiseId": 2, "storeId": 4, "items":[{{ "menuId": 1, "description": "Veggie", "price": 0.0038 }}]}}' -H 'Authorization: Bearer tttttt'"#,
                host
            ),
            response: json!({ "order": { "id": 1, "franchiseId": 2, "storeId": 4, "items": [{ "menuId": 1, "description": "Veggie", "price": 0.0038 }] }, "jwt": "1111111111" }),
            requires_auth: true,
        },
        Endpoint {
            method: "POST",
            path: "/api/order/verify",
            description: "Verify a pizza JWT",
            example: format!(
                r#"curl -X POST {}/api/order/verify -H 'Content-Type: application/json' -d '{{"jwt": "1111111111"}}'"#,
                host
            ),
            response: json!({ "message": "valid", "payload": { "order": { "id": 1 } } }),
            requires_auth: false,
        },
    ]
}
