//! Fixed reply texts.

pub const INFO: &str = "How can we help you? You can talk to our assistant. Try saying 'I want to access' or 'show me the products list'. If you want to know about a specific product, you can use 'please tell me about mountain bike' or similar messages. Our smart digital assistant will do its best to help you!";

pub const USAGE_PATTERN: &str = "You can also say help to display some options";

pub const NOT_UNDERSTOOD: &str =
    "I did not understand you, sorry. Try again with a different sentence, please";

pub const TRY_AGAIN: &str = "Sorry, something went wrong on my side. Please try again in a moment.";

pub const ASK_NAME: &str = "What is your name?";

pub const ASK_EMAIL: &str = "Please add your email to your login message";

pub const USER_NOT_FOUND: &str = "User not found. Please try again";

pub const WHAT_ELSE: &str = "What else can I do for you?";

pub const TOP_PRODUCTS: &str = "Our top 5 products are: ";

pub const MATCHING_PRODUCTS: &str = "Your query returned the following products: ";

pub const NO_RESULTS: &str = "No results";

pub const RECEIPT_INTRO: &str = "Here is your receipt: ";

pub const HELP_KEYWORD: &str = "help";

pub fn welcome(store_name: &str) -> String {
    format!("Welcome to {}", store_name)
}

pub fn greeting(store_name: &str) -> String {
    format!("Hi there. {}", welcome(store_name))
}

pub fn thanks(name: &str) -> String {
    format!("Thanks {}.", name)
}

pub fn added_to_cart(product_name: &str) -> String {
    format!("Product {} was added to the cart.", product_name)
}

pub fn product_not_found(product_id: impl std::fmt::Display) -> String {
    format!("Product {} was not found.", product_id)
}

pub fn add_to_cart_command(product_id: impl std::fmt::Display) -> String {
    format!("Add product {} to the cart", product_id)
}

pub fn activity_detected(kind: impl std::fmt::Display) -> String {
    format!("{} activity detected", kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_includes_store_name() {
        assert_eq!(greeting("Adventure Works"), "Hi there. Welcome to Adventure Works");
    }

    #[test]
    fn add_to_cart_command_carries_id() {
        assert_eq!(add_to_cart_command(712), "Add product 712 to the cart");
    }
}
