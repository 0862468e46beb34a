use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Wraps a contact address (email, card holder, customer name) so that it
/// never reaches log output in the clear.
///
/// `Display` keeps the first character and, for emails, the domain:
/// `aruzhan@gmail.com` renders as `a******@gmail.com`. `Debug` hides
/// everything. Serialization still yields the real value.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Masked<T>(pub T);

impl<T: AsRef<str>> Masked<T> {
    fn redacted(&self) -> String {
        let raw = self.0.as_ref();
        let (local, domain) = match raw.split_once('@') {
            Some((local, domain)) => (local, Some(domain)),
            None => (raw, None),
        };

        let mut out = String::with_capacity(raw.len());
        let mut chars = local.chars();
        if let Some(first) = chars.next() {
            out.push(first);
            out.extend(chars.map(|_| '*'));
        }
        if let Some(domain) = domain {
            out.push('@');
            out.push_str(domain);
        }
        out
    }
}

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: AsRef<str>> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}
