//! 种子数据生成
//! 首次运行或 reset 时生成一份内部引用一致的随机数据集

use std::collections::HashSet;
use std::fmt::Debug;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::SeedConfig;
use crate::models::{Dataset, Permission, Role, User};

/// 数据集来源
pub trait SeedSource: Send + Sync + Debug {
    fn generate(&self) -> Dataset;
}

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Maria", "Ahmed", "Wei", "Olga", "Carlos", "Aiko", "Liam", "Emma",
    "Noah", "Sofia", "Ivan", "Chloe", "Mateo", "Priya", "Lucas", "Hana", "Omar", "Elena",
    "Jonas", "Freya", "Diego", "Yuki", "Bjork", "Nadia", "Pavel", "Grace", "Tomas", "Leila",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Garcia", "Chen", "Petrov", "Tanaka", "Silva", "Kowalski", "Brown",
    "Muller", "Rossi", "Nguyen", "Kim", "Haddad", "Jensen", "Lopez", "Novak", "Okafor",
    "Walker", "Fischer", "Moreau", "Ivanova", "Santos", "Berg", "Sato",
];

const DOMAINS: &[&str] = &["example.com", "mail.test", "corp.local", "acme.io", "x.org"];

const ACTIONS: &[&str] = &[
    "read", "write", "create", "update", "delete", "export", "import", "approve", "audit",
    "manage", "view", "share",
];

const RESOURCES: &[&str] = &[
    "users", "roles", "reports", "invoices", "orders", "assets", "billing", "logs",
    "settings", "projects", "tickets", "metrics", "backups", "secrets", "teams", "files",
];

const ROLE_PREFIXES: &[&str] = &[
    "senior", "junior", "lead", "acting", "regional", "global", "night", "guest", "chief",
    "deputy",
];

const ROLE_TITLES: &[&str] = &[
    "admin", "auditor", "editor", "viewer", "operator", "analyst", "manager", "support",
    "developer", "reviewer", "owner", "accountant",
];

/// 基于 rand 的随机数据生成器
#[derive(Debug)]
pub struct FakeSeed {
    config: SeedConfig,
    rng: Mutex<StdRng>,
}

impl FakeSeed {
    pub fn new(config: SeedConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            rng: Mutex::new(rng),
        }
    }

    fn pick<'a>(rng: &mut StdRng, words: &[&'a str]) -> &'a str {
        words.choose(rng).copied().unwrap_or_default()
    }

    fn new_id(rng: &mut StdRng) -> String {
        uuid::Builder::from_random_bytes(rng.gen()).into_uuid().to_string()
    }

    /// 生成 n 个互不相同的名称；撞名时追加序号
    fn unique_names(
        rng: &mut StdRng,
        n: usize,
        mut make: impl FnMut(&mut StdRng) -> String,
    ) -> Vec<String> {
        let mut seen = HashSet::with_capacity(n);
        let mut names = Vec::with_capacity(n);

        while names.len() < n {
            let mut name = make(rng);
            if seen.contains(&name) {
                name = format!("{}-{}", name, names.len());
            }
            seen.insert(name.clone());
            names.push(name);
        }

        names
    }

    /// 每个实体关联 1..=max_links 个互不相同的引用
    fn link_count(&self, rng: &mut StdRng, available: usize) -> usize {
        let max = self.config.max_links.min(available);
        if max == 0 {
            return 0;
        }
        rng.gen_range(1..=max)
    }
}

impl SeedSource for FakeSeed {
    fn generate(&self) -> Dataset {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let rng = &mut *rng;

        let permissions: Vec<Permission> =
            Self::unique_names(rng, self.config.permissions, |rng| {
                format!("{}:{}", Self::pick(rng, ACTIONS), Self::pick(rng, RESOURCES))
            })
            .into_iter()
            .map(|name| Permission {
                id: Self::new_id(rng),
                name,
            })
            .collect();

        let role_names = Self::unique_names(rng, self.config.roles, |rng| {
            format!("{}-{}", Self::pick(rng, ROLE_PREFIXES), Self::pick(rng, ROLE_TITLES))
        });

        let mut roles = Vec::with_capacity(role_names.len());
        for name in role_names {
            let links = self.link_count(rng, permissions.len());
            roles.push(Role {
                id: Self::new_id(rng),
                name,
                permissions: permissions
                    .choose_multiple(rng, links)
                    .map(Permission::to_ref)
                    .collect(),
            });
        }

        let mut full_names = Vec::with_capacity(self.config.users);
        let emails = Self::unique_names(rng, self.config.users, |rng| {
            let first = Self::pick(rng, FIRST_NAMES);
            let last = Self::pick(rng, LAST_NAMES);
            full_names.push(format!("{} {}", first, last));
            format!("{}.{}", first, last).to_lowercase()
        });

        let mut users = Vec::with_capacity(emails.len());
        for (local, name) in emails.into_iter().zip(full_names) {
            let domain = Self::pick(rng, DOMAINS);
            let links = self.link_count(rng, roles.len());
            users.push(User {
                id: Self::new_id(rng),
                name,
                email: format!("{}@{}", local, domain),
                roles: roles.choose_multiple(rng, links).map(Role::to_ref).collect(),
            });
        }

        tracing::info!(
            users = users.len(),
            roles = roles.len(),
            permissions = permissions.len(),
            "Seed dataset generated"
        );

        Dataset {
            users,
            roles,
            permissions,
        }
    }
}
