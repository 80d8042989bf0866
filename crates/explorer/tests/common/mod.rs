#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use explorer::{Explorer, ExplorerConfig, OrderClient, ResponsePolicy};
use serde_json::json;
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl Reply {
    pub fn order(create_id: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: order_json(create_id).to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Default)]
struct MockState {
    replies: HashMap<String, Reply>,
    hits: Mutex<Vec<String>>,
}

/// In-process stand-in for the order API. Unknown ids get a 404.
pub struct MockApi {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockApi {
    pub async fn serve(replies: impl IntoIterator<Item = (String, Reply)>) -> Self {
        let state = Arc::new(MockState {
            replies: replies.into_iter().collect(),
            ..Default::default()
        });

        let app = Router::new()
            .route("/orders/id/:id/matched", get(matched))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub async fn empty() -> Self {
        Self::serve(Vec::<(String, Reply)>::new()).await
    }

    /// Ids requested so far, in arrival order.
    pub fn hits(&self) -> Vec<String> {
        self.state.hits.lock().unwrap().clone()
    }

    pub fn config(&self, policy: ResponsePolicy) -> ExplorerConfig {
        ExplorerConfig::new(&self.base_url)
            .unwrap()
            .with_policy(policy)
    }

    pub fn client(&self) -> OrderClient {
        OrderClient::new(&self.config(ResponsePolicy::default()))
    }

    pub fn explorer(&self, policy: ResponsePolicy) -> Explorer {
        Explorer::new(&self.config(policy))
    }
}

async fn matched(State(state): State<Arc<MockState>>, Path(id): Path<String>) -> Response {
    state.hits.lock().unwrap().push(id.clone());

    match state.replies.get(&id).cloned() {
        Some(reply) => {
            tokio::time::sleep(reply.delay).await;
            (
                reply.status,
                [(header::CONTENT_TYPE, "application/json")],
                reply.body,
            )
                .into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub fn order_id(c: char) -> String {
    c.to_string().repeat(64)
}

pub fn order_json(create_id: &str) -> serde_json::Value {
    json!({
        "status": "Ok",
        "result": {
            "created_at": "2025-03-01T10:20:30.123456Z",
            "create_order": {
                "create_id": create_id,
                "user_id": "0x0b0c1d2e3f405162738495a6b7c8d9eaf0b1c2d3",
                "secret_hash": "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08",
                "source_chain": "bitcoin",
                "source_asset": "primary",
                "source_amount": "50000",
                "destination_chain": "ethereum",
                "destination_asset": "0xcbB7C0000aB88B473b1f5aFd9ef808440eed33Bf",
                "destination_amount": "49850",
                "initiator_source_address": "bc1qexampleinitiator",
                "initiator_destination_address": "0x1111111111111111111111111111111111111111",
                "fee": "150",
                "timelock": 144,
                "min_destination_confirmations": 3,
                "block_number": "21900000",
                "nonce": "1740824430",
                "additional_data": {
                    "strategy_id": "bbtcetwbtc",
                    "bitcoin_optional_recipient": "bc1qexamplerecipient",
                    "is_blacklisted": false,
                    "tx_hash": "0xabc",
                    "input_token_price": 84250.12,
                    "output_token_price": 84199.5,
                    "deadline": 1740826830u64,
                    "sig": "0xsig"
                }
            },
            "source_swap": {
                "swap_id": "src-swap",
                "chain": "bitcoin",
                "asset": "primary",
                "amount": "50000",
                "filled_amount": "50000",
                "initiator": "bc1qexampleinitiator",
                "redeemer": "bc1qexampleredeemer",
                "initiate_tx_hash": "aa",
                "redeem_tx_hash": "bb",
                "timelock": 144,
                "required_confirmations": 1,
                "current_confirmations": 1,
                "secret": "cc",
                "initiate_block_number": "885000",
                "redeem_block_number": "885010",
                "created_at": "2025-03-01T10:20:31Z",
                "updated_at": "2025-03-01T11:00:00Z"
            },
            "destination_swap": {
                "swap_id": "dst-swap",
                "chain": "ethereum",
                "amount": "49850",
                "filled_amount": "",
                "timelock": 7200,
                "required_confirmations": 3,
                "current_confirmations": 0
            }
        }
    })
}
