use cafebot::callback::CallbackAction;

/// Test that every action survives an encode/parse round trip
#[test]
fn test_actions_round_trip() {
    let actions = [
        CallbackAction::MainMenu,
        CallbackAction::Category("coffee".to_string()),
        CallbackAction::Item("cold_brew".to_string()),
        CallbackAction::Contact,
        CallbackAction::Location,
        CallbackAction::OrderInfo,
        CallbackAction::OrderItem("avocado_toast".to_string()),
        CallbackAction::CallOrder,
        CallbackAction::EmailOrder,
        CallbackAction::CallCafe,
        CallbackAction::EmailCafe,
        CallbackAction::Website,
        CallbackAction::Instagram,
        CallbackAction::AddToCart("espresso".to_string()),
        CallbackAction::ShowCart,
        CallbackAction::Increase("espresso".to_string()),
        CallbackAction::Decrease("espresso".to_string()),
        CallbackAction::ClearCart,
        CallbackAction::PlaceOrder,
    ];

    for action in actions {
        let data = action.as_data();
        assert_eq!(
            CallbackAction::parse(&data),
            Some(action),
            "round trip failed for '{data}'"
        );
    }
}

/// Test that "order" and "order_<item>" are distinguished
#[test]
fn test_order_info_vs_order_item() {
    assert_eq!(CallbackAction::parse("order"), Some(CallbackAction::OrderInfo));
    assert_eq!(
        CallbackAction::parse("order_latte"),
        Some(CallbackAction::OrderItem("latte".to_string()))
    );
}

/// Test identifiers whose payload itself contains underscores
#[test]
fn test_payloads_with_underscores() {
    assert_eq!(
        CallbackAction::parse("item_cold_brew"),
        Some(CallbackAction::Item("cold_brew".to_string()))
    );
    assert_eq!(
        CallbackAction::parse("cart_add_avocado_toast"),
        Some(CallbackAction::AddToCart("avocado_toast".to_string()))
    );
    assert_eq!(
        CallbackAction::parse("cart_dec_pain_choc"),
        Some(CallbackAction::Decrease("pain_choc".to_string()))
    );
}

/// Test that unknown or malformed identifiers parse to None
#[test]
fn test_unknown_identifiers_parse_to_none() {
    for data in [
        "",
        "bogus",
        "category_",
        "item_",
        "order_",
        "cart_",
        "cart_add_",
        "cart_fry_espresso",
        "edit_0",
        "confirm",
    ] {
        assert_eq!(CallbackAction::parse(data), None, "'{data}' should not parse");
    }
}
