use crate::page::Page;
use contracts::routes::{LoadError, RouteName};
use leptos::prelude::*;
use std::fmt;
use thaw::*;

pub async fn load() -> Result<Page, LoadError> {
    Ok(Page::new(RouteName::SignUp, "Регистрация", || {
        view! { <SignUpPage /> }.into_any()
    }))
}

const MIN_PASSWORD_LEN: usize = 8;

/// Данные формы регистрации. Отправки на сервер нет, только проверка на клиенте.
#[derive(Clone, Default, PartialEq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Укажите имя");
        }
        if !is_plausible_email(self.email.trim()) {
            return Err("Некорректный email");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err("Пароль должен содержать не менее 8 символов");
        }
        Ok(())
    }
}

/// Email и пароль в логи не попадают.
impl fmt::Debug for SignUpForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpForm")
            .field("name_len", &self.name.trim().chars().count())
            .field("email", &"<redacted>")
            .field("password", &"<redacted>")
            .finish()
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(false);

    let on_submit = move |_: leptos::ev::MouseEvent| {
        let form = SignUpForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        match form.validate() {
            Ok(()) => {
                log::info!("Sign-up form accepted: {:?}", form);
                error_message.set(None);
                submitted.set(true);
            }
            Err(e) => error_message.set(Some(e.to_string())),
        }
    };

    view! {
        <section class="signup">
            <h1>"Регистрация"</h1>

            <Show
                when=move || submitted.get()
                fallback=move || view! {
                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <div class="form-group">
                        <label>"Имя"</label>
                        <Input value=name placeholder="Иван" />
                    </div>
                    <div class="form-group">
                        <label>"Email"</label>
                        <Input value=email input_type=InputType::Email placeholder="you@example.com" />
                    </div>
                    <div class="form-group">
                        <label>"Пароль"</label>
                        <Input value=password input_type=InputType::Password />
                    </div>

                    <Button appearance=ButtonAppearance::Primary on_click=on_submit>
                        "Создать аккаунт"
                    </Button>
                }
            >
                <p class="signup__done">
                    {move || format!("Спасибо, {}! Письмо с подтверждением придёт на {}.", name.get().trim(), email.get().trim())}
                </p>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, password: &str) -> SignUpForm {
        SignUpForm {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(form("Иван", "ivan@example.com", "correct horse").validate(), Ok(()));
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(form("   ", "ivan@example.com", "password1").validate(), Err("Укажите имя"));
    }

    #[test]
    fn test_bad_email() {
        for email in ["", "ivan", "@example.com", "ivan@", "ivan@example", "a@b@c.d", "ivan@.com"] {
            assert_eq!(
                form("Иван", email, "password1").validate(),
                Err("Некорректный email"),
                "{email:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_debug_output_hides_credentials() {
        let logged = format!("{:?}", form("Иван", "ivan@example.com", "correct horse"));
        assert!(!logged.contains("ivan@example.com"));
        assert!(!logged.contains("correct horse"));
        assert!(logged.contains("<redacted>"));
    }

    #[test]
    fn test_short_password() {
        assert!(form("Иван", "ivan@example.com", "1234567").validate().is_err());
        // длина считается в символах, а не в байтах
        assert!(form("Иван", "ivan@example.com", "пароль12").validate().is_ok());
    }
}
