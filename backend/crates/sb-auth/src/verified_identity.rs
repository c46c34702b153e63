/// Identity attributes extracted from a successfully verified credential.
///
/// This is all the rest of the system ever learns about a sign-in; the
/// credential itself stops here.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    /// Issuer-scoped stable subject.
    pub subject: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub picture_url: Option<String>,
}
