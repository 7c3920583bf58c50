use contracts::domain::{NewListing, Product};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::system::auth::Session;

/// Endpoint for the list fetch: the owner view is scoped server-side.
pub fn listings_path(my_listings: bool) -> &'static str {
    if my_listings {
        "/products/mylistings"
    } else {
        "/products"
    }
}

/// Fetch all public listings, or the caller's own when `my_listings` is set
pub async fn fetch_listings(
    session: &Session,
    my_listings: bool,
) -> Result<Vec<Product>, String> {
    let response = Request::get(&api_url(listings_path(my_listings)))
        .header("Authorization", &session.authorization_header())
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Fetch listings failed: {}", response.status()));
    }

    response
        .json::<Vec<Product>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete a listing by id
pub async fn delete_listing(session: &Session, id: i64) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/products/{}", id)))
        .header("Authorization", &session.authorization_header())
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Delete failed: {}", response.status()));
    }

    Ok(())
}

/// Create a listing
pub async fn create_listing(session: &Session, listing: &NewListing) -> Result<(), String> {
    let response = Request::post(&api_url("/products"))
        .header("Authorization", &session.authorization_header())
        .json(listing)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Create failed: {}", response.status()));
    }

    Ok(())
}
