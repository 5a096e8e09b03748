//! User documents.

use crate::generator::{Record, RecordKind};
use crate::pools::{one_of, EMAIL_DOMAINS, MAX_ID, USERNAMES};
use rand::Rng;
use serde::Serialize;

/// A synthetic user account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: u32,
    #[serde(rename = "username_s")]
    pub username: String,
    #[serde(rename = "email_s")]
    pub email: String,
    /// 18..=77
    #[serde(rename = "age_i")]
    pub age: u32,
    #[serde(rename = "active_b")]
    pub active: bool,
    /// 0.0..1000.0
    #[serde(rename = "balance_f")]
    pub balance: f64,
}

/// Generate a random user.
///
/// The email is derived from the username, the id and a random domain, e.g.
/// `alice4821@test.org`.
pub fn random_user<R: Rng + ?Sized>(rng: &mut R) -> User {
    let username = one_of(rng, USERNAMES);
    let domain = one_of(rng, EMAIL_DOMAINS);
    let age = rng.gen_range(18..=77);
    let balance = rng.gen::<f64>() * 1000.0;
    let active = rng.gen_bool(0.5);
    let id = rng.gen_range(0..MAX_ID);

    User {
        id,
        username: username.to_string(),
        email: format!("{username}{id}@{domain}"),
        age,
        active,
        balance,
    }
}

impl Record for User {
    const KIND: RecordKind = RecordKind::Users;

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        random_user(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::seeded_rng;

    #[test]
    fn test_user_fields_within_bounds() {
        let mut rng = seeded_rng(Some(42), 0);

        for _ in 0..1000 {
            let user = random_user(&mut rng);

            assert!((18..=77).contains(&user.age), "age {}", user.age);
            assert!((0.0..1000.0).contains(&user.balance), "balance {}", user.balance);
            assert!(user.id < MAX_ID);
            assert!(USERNAMES.contains(&user.username.as_str()));
        }
    }

    #[test]
    fn test_email_derived_from_username_and_id() {
        let mut rng = seeded_rng(Some(3), 0);

        for _ in 0..200 {
            let user = random_user(&mut rng);
            let (local, domain) = user.email.split_once('@').unwrap();

            assert_eq!(local, format!("{}{}", user.username, user.id));
            assert!(EMAIL_DOMAINS.contains(&domain), "domain {domain}");
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = seeded_rng(Some(42), 0);
        let mut rng2 = seeded_rng(Some(42), 0);

        for _ in 0..10 {
            assert_eq!(random_user(&mut rng1), random_user(&mut rng2));
        }
    }

    #[test]
    fn test_json_keys_carry_type_suffixes() {
        let user = User {
            id: 7,
            username: "eve".to_string(),
            email: "eve7@demo.net".to_string(),
            age: 30,
            active: true,
            balance: 12.5,
        };

        let json = serde_json::to_value(&user).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 6);
        assert_eq!(obj["id"], 7);
        assert_eq!(obj["username_s"], "eve");
        assert_eq!(obj["email_s"], "eve7@demo.net");
        assert_eq!(obj["age_i"], 30);
        assert_eq!(obj["active_b"], true);
        assert_eq!(obj["balance_f"], 12.5);
    }

    #[test]
    fn test_record_trait_targets_users_collection() {
        let mut rng = seeded_rng(Some(1), 0);
        let user = <User as Record>::random(&mut rng);

        assert_eq!(User::KIND.collection(), "users");
        assert!(user.email.contains(&user.username));
    }
}
