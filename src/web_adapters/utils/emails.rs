use actix_web::web;
use common::settings::types::Settings;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::{
        smtp::{
            authentication::{Credentials, Mechanism},
            PoolConfig,
        },
        stub::StubTransport,
    },
    Address, Message, SmtpTransport, Transport,
};
use minijinja::{context, Environment};
use once_cell::sync::Lazy;
use use_cases::websites::verification::types::{
    VerificationMailer, WebsiteVerificationEmail, VERIFICATION_TOKEN_TTL_HOURS,
};

const APP_NAME: &str = "AI Tool Directory";
const WEBSITE_VERIFICATION_TEMPLATE: &str = "website_verification_email.html";

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template(
        WEBSITE_VERIFICATION_TEMPLATE,
        include_str!("templates/website_verification_email.html"),
    )
    .expect("Bundled email template must be valid.");
    env
});

#[derive(Clone)]
pub enum MailTransport {
    Smtp(SmtpTransport),
    /// Accepts (or rejects) every message without network access.
    Stub(StubTransport),
}

impl MailTransport {
    fn send(&self, message: &Message) -> Result<(), String> {
        match self {
            MailTransport::Smtp(transport) => transport
                .send(message)
                .map(|_| ())
                .map_err(|e| format!("Could not send email: {:?}", e)),
            MailTransport::Stub(transport) => transport
                .send(message)
                .map_err(|e| format!("Could not send email: {:?}", e)),
        }
    }
}

pub struct Mailer {
    sender: Mailbox,
    transport: MailTransport,
}

impl Mailer {
    pub fn new(sender: &str, transport: MailTransport) -> Result<Self, String> {
        let sender = sender.parse::<Mailbox>().map_err(|e| {
            tracing::event!(target: "backend", tracing::Level::ERROR, "Failed to get sender mailbox setting: {:#?}", e);
            e.to_string()
        })?;
        Ok(Self { sender, transport })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, String> {
        let credentials = Credentials::new(
            settings.email.host_user.clone(),
            settings.email.host_user_password.clone(),
        );
        let transport = SmtpTransport::starttls_relay(&settings.email.host)
            .map_err(|e| e.to_string())?
            .credentials(credentials)
            .authentication(vec![Mechanism::Plain])
            .pool_config(PoolConfig::new().max_size(20))
            .build();
        Self::new(&settings.email.sender, MailTransport::Smtp(transport))
    }

    fn build_website_verification_message(
        &self,
        email: &WebsiteVerificationEmail,
    ) -> Result<Message, String> {
        let title = format!("{APP_NAME} - Verify your website");
        let recipient_address = email
            .recipient_email
            .parse::<Address>()
            .map_err(|e| e.to_string())?;
        let recipient = Mailbox::new(Some(email.recipient_name.clone()), recipient_address);

        let html_text = TEMPLATES
            .get_template(WEBSITE_VERIFICATION_TEMPLATE)
            .and_then(|template| {
                template.render(context! {
                    title => &title,
                    recipient_name => &email.recipient_name,
                    website_url => &email.website_url,
                    verification_link => &email.verification_link,
                    expiration_hours => VERIFICATION_TOKEN_TTL_HOURS,
                    exact_time => email.expires_at.format("%A %B %d, %Y at %r").to_string(),
                })
            })
            .map_err(|e| e.to_string())?;
        let text = format!(
            "Open the link below to confirm that you own {}. It expires in {} hours.\n{}\n",
            email.website_url, VERIFICATION_TOKEN_TTL_HOURS, email.verification_link
        );

        Message::builder()
            .from(self.sender.clone())
            .to(recipient)
            .subject(title)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_text),
                    ),
            )
            .map_err(|e| e.to_string())
    }
}

impl VerificationMailer for Mailer {
    #[tracing::instrument(
        name = "Sending website verification email",
        skip(self, email),
        fields(recipient_email = %email.recipient_email, website_url = %email.website_url)
    )]
    async fn send_website_verification(&self, email: WebsiteVerificationEmail) -> Result<(), String> {
        let message = self.build_website_verification_message(&email)?;
        let transport = self.transport.clone();

        match web::block(move || transport.send(&message)).await {
            Ok(Ok(())) => {
                tracing::event!(target: "backend", tracing::Level::INFO, "Email successfully sent!");
                Ok(())
            }
            Ok(Err(e)) => {
                tracing::event!(target: "backend", tracing::Level::ERROR, "{}", e);
                Err(e)
            }
            Err(e) => {
                tracing::event!(target: "backend", tracing::Level::ERROR, "Email worker failed: {:?}", e);
                Err(e.to_string())
            }
        }
    }
}
