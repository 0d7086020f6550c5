//! Submit the registration form from the terminal.
//!
//! # Usage
//!
//! ```bash
//! reg-cli register --name "Ada Lovelace" --email ada@example.com
//! reg-cli register --url https://reg.example.com --name Ada --email ada@example.com
//! ```

use customer_registration_client::{
    HttpRegistrationApi, RegistrationForm, SubmitOutcome, TransportError,
};

/// Fill the form with `name` and `email`, submit it once, and print the
/// resulting status message.
///
/// Returns whether the registration was accepted.
///
/// # Errors
///
/// Returns `TransportError::InvalidUrl` if `url` cannot be parsed. Network
/// failures are reported through the form's status message instead.
pub async fn run(url: &str, name: &str, email: &str) -> Result<bool, TransportError> {
    let api = HttpRegistrationApi::new(url)?;

    let mut form = RegistrationForm::new();
    form.set_name(name);
    form.set_email(email);

    let outcome = form.submit(&api).await;

    #[allow(clippy::print_stdout)]
    {
        println!("{}", form.status());
        if let SubmitOutcome::Registered(Some(customer)) = &outcome {
            println!(
                "  id: {}  email: {}  registered at: {}",
                customer.id, customer.email, customer.registered_at
            );
        }
    }

    Ok(matches!(outcome, SubmitOutcome::Registered(_)))
}
