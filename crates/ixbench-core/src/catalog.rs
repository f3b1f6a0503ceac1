//! The four fixed scenarios for the Krusty CRM dataset, in run order.

use crate::errors::BenchResult;
use crate::model::Scenario;
use crate::psql::Psql;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    KitchenQueue,
    ClientHistory,
    RecentPayments,
    MenuSearch,
}

impl Case {
    pub const ALL: [Case; 4] = [
        Case::KitchenQueue,
        Case::ClientHistory,
        Case::RecentPayments,
        Case::MenuSearch,
    ];

    /// Statements run once before the case is benchmarked.
    pub fn setup_statements(self) -> &'static [&'static str] {
        match self {
            // a leftover single-column index would serve the baseline
            Case::KitchenQueue => &["DROP INDEX IF EXISTS idx_orders_status;"],
            Case::ClientHistory | Case::RecentPayments => &[],
            Case::MenuSearch => &["create extension if not exists pg_trgm;"],
        }
    }

    /// Run setup and any parameter lookups, then build the scenario.
    pub async fn prepare(self, psql: &Psql<'_>, db: &str) -> BenchResult<Scenario> {
        for stmt in self.setup_statements() {
            psql.execute(db, stmt).await?;
        }
        let scenario = match self {
            Case::KitchenQueue => kitchen_queue(),
            Case::ClientHistory => {
                let client_id = psql.fetch_scalar(db, BUSIEST_CLIENT).await?;
                client_history(&client_id)
            }
            Case::RecentPayments => {
                let from_ts = psql.fetch_scalar(db, WINDOW_START).await?;
                let to_ts = psql.fetch_scalar(db, WINDOW_END).await?;
                recent_payments(&from_ts, &to_ts)
            }
            Case::MenuSearch => menu_search(),
        };
        tracing::debug!(event = "ixbench.scenario_prepared", case = ?self, query = %scenario.query);
        Ok(scenario)
    }
}

pub const BUSIEST_CLIENT: &str =
    "select client_id from orders group by client_id order by count(*) desc limit 1;";
pub const WINDOW_START: &str = "select (now() - interval '30 days')::timestamp;";
pub const WINDOW_END: &str = "select now()::timestamp;";

pub fn size_probe(index: &str) -> String {
    format!("select pg_size_pretty(pg_relation_size('{}'))", index)
}

pub fn kitchen_queue() -> Scenario {
    Scenario::new(
        "orders: status IN (...) ORDER BY created_at LIMIT 5000",
        "select o.id from orders o where o.status in ('confirmed','preparing') order by o.created_at asc limit 5000",
        "create index if not exists idx_orders_status_created_at on orders(status, created_at)",
        Some(size_probe("idx_orders_status_created_at")),
    )
}

/// Covering index: the index alone answers the query.
pub fn client_history(client_id: &str) -> Scenario {
    Scenario::new(
        format!(
            "orders: client_id={} ORDER BY created_at DESC LIMIT 1000 (covering)",
            client_id
        ),
        format!(
            "select id from orders where client_id = {} order by created_at desc limit 1000",
            client_id
        ),
        "create index if not exists idx_orders_client_created_at_id on orders(client_id, created_at desc, id)",
        Some(size_probe("idx_orders_client_created_at_id")),
    )
}

/// Partial index over successful payments, queried for a 30-day window.
pub fn recent_payments(from_ts: &str, to_ts: &str) -> Scenario {
    Scenario::new(
        "payments: success AND paid_at BETWEEN last 30d",
        format!(
            "select sum(amount) from payments where success = true and paid_at between '{}' and '{}'",
            from_ts, to_ts
        ),
        "create index if not exists idx_payments_paid_at_success on payments(paid_at) where success = true",
        Some(size_probe("idx_payments_paid_at_success")),
    )
}

/// Trigram GIN index; needs `pg_trgm` (see [`Case::setup_statements`]).
pub fn menu_search() -> Scenario {
    Scenario::new(
        "menu_items: name ILIKE '%Patty%'",
        "select count(*) from menu_items where name ilike '%Patty%'",
        "create index if not exists idx_menu_items_name_trgm on menu_items using gin (name gin_trgm_ops)",
        Some(size_probe("idx_menu_items_name_trgm")),
    )
}
