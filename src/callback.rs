//! # Callback Identifier Module
//!
//! Typed representation of the opaque callback identifiers carried by inline
//! keyboard buttons. Every button encodes the full navigation target in its
//! identifier, so each press is handled statelessly: the handler parses the
//! identifier, looks the target up in the catalog, and renders the view.

/// An action encoded in inline keyboard callback data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    /// Show the main menu with category buttons
    MainMenu,
    /// Show one category's item list
    Category(String),
    /// Show a single item's details
    Item(String),
    /// Show contact information
    Contact,
    /// Show location and hours
    Location,
    /// Show general ordering instructions
    OrderInfo,
    /// Show ordering instructions for a specific item
    OrderItem(String),
    /// Show the phone number for placing orders
    CallOrder,
    /// Show the email address for placing orders
    EmailOrder,
    /// Show the cafe's general phone number
    CallCafe,
    /// Show the cafe's general email address
    EmailCafe,
    /// Show the website link
    Website,
    /// Show the Instagram handle
    Instagram,
    /// Add one unit of an item to the user's cart
    AddToCart(String),
    /// Show the user's cart
    ShowCart,
    /// Increase an item's quantity in the cart by one
    Increase(String),
    /// Decrease an item's quantity in the cart by one
    Decrease(String),
    /// Empty the user's cart
    ClearCart,
    /// Hand the cart off to the phone/email ordering flow
    PlaceOrder,
}

impl CallbackAction {
    /// Parse callback data into an action. Unknown identifiers return `None`
    /// and are answered with a generic fallback by the handler.
    pub fn parse(data: &str) -> Option<Self> {
        // Exact identifiers first: "order" is a prefix of "order_*"
        let action = match data {
            "main_menu" => Self::MainMenu,
            "contact" => Self::Contact,
            "location" => Self::Location,
            "order" => Self::OrderInfo,
            "call_order" => Self::CallOrder,
            "email_order" => Self::EmailOrder,
            "call_cafe" => Self::CallCafe,
            "email_cafe" => Self::EmailCafe,
            "website" => Self::Website,
            "instagram" => Self::Instagram,
            "cart_show" => Self::ShowCart,
            "cart_clear" => Self::ClearCart,
            "cart_order" => Self::PlaceOrder,
            _ => {
                let (prefix, rest) = data.split_once('_')?;
                if rest.is_empty() {
                    return None;
                }
                match prefix {
                    "category" => Self::Category(rest.to_string()),
                    "item" => Self::Item(rest.to_string()),
                    "order" => Self::OrderItem(rest.to_string()),
                    "cart" => {
                        let (op, item_id) = rest.split_once('_')?;
                        if item_id.is_empty() {
                            return None;
                        }
                        match op {
                            "add" => Self::AddToCart(item_id.to_string()),
                            "inc" => Self::Increase(item_id.to_string()),
                            "dec" => Self::Decrease(item_id.to_string()),
                            _ => return None,
                        }
                    }
                    _ => return None,
                }
            }
        };
        Some(action)
    }

    /// Encode the action as callback data. Inverse of [`parse`](Self::parse).
    pub fn as_data(&self) -> String {
        match self {
            Self::MainMenu => "main_menu".to_string(),
            Self::Category(id) => format!("category_{id}"),
            Self::Item(id) => format!("item_{id}"),
            Self::Contact => "contact".to_string(),
            Self::Location => "location".to_string(),
            Self::OrderInfo => "order".to_string(),
            Self::OrderItem(id) => format!("order_{id}"),
            Self::CallOrder => "call_order".to_string(),
            Self::EmailOrder => "email_order".to_string(),
            Self::CallCafe => "call_cafe".to_string(),
            Self::EmailCafe => "email_cafe".to_string(),
            Self::Website => "website".to_string(),
            Self::Instagram => "instagram".to_string(),
            Self::AddToCart(id) => format!("cart_add_{id}"),
            Self::ShowCart => "cart_show".to_string(),
            Self::Increase(id) => format!("cart_inc_{id}"),
            Self::Decrease(id) => format!("cart_dec_{id}"),
            Self::ClearCart => "cart_clear".to_string(),
            Self::PlaceOrder => "cart_order".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_identifiers() {
        assert_eq!(CallbackAction::parse("main_menu"), Some(CallbackAction::MainMenu));
        assert_eq!(CallbackAction::parse("order"), Some(CallbackAction::OrderInfo));
        assert_eq!(CallbackAction::parse("cart_show"), Some(CallbackAction::ShowCart));
    }

    #[test]
    fn test_parse_prefixed_identifiers() {
        assert_eq!(
            CallbackAction::parse("category_coffee"),
            Some(CallbackAction::Category("coffee".to_string()))
        );
        assert_eq!(
            CallbackAction::parse("order_espresso"),
            Some(CallbackAction::OrderItem("espresso".to_string()))
        );
        assert_eq!(
            CallbackAction::parse("cart_add_cold_brew"),
            Some(CallbackAction::AddToCart("cold_brew".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_identifiers() {
        assert_eq!(CallbackAction::parse(""), None);
        assert_eq!(CallbackAction::parse("bogus"), None);
        assert_eq!(CallbackAction::parse("category_"), None);
        assert_eq!(CallbackAction::parse("cart_fry_x"), None);
    }
}
