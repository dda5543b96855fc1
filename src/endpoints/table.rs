//! Exchange endpoint table

use super::{EndpointDescriptor, ParamLocation, ParamSpec};
use crate::rest::HttpMethod;

const fn r(name: &'static str) -> ParamSpec {
    ParamSpec::required(name)
}

const fn o(name: &'static str) -> ParamSpec {
    ParamSpec::optional(name)
}

const fn endpoint(
    group: &'static str,
    name: &'static str,
    method: HttpMethod,
    path: &'static str,
    params: &'static [ParamSpec],
    location: ParamLocation,
) -> EndpointDescriptor {
    EndpointDescriptor {
        name,
        group,
        method,
        path,
        params,
        location: if params.is_empty() {
            ParamLocation::PathOnly
        } else {
            location
        },
    }
}

const fn get(
    group: &'static str,
    name: &'static str,
    path: &'static str,
    params: &'static [ParamSpec],
) -> EndpointDescriptor {
    endpoint(group, name, HttpMethod::Get, path, params, ParamLocation::Query)
}

const fn post(
    group: &'static str,
    name: &'static str,
    path: &'static str,
    params: &'static [ParamSpec],
) -> EndpointDescriptor {
    endpoint(group, name, HttpMethod::Post, path, params, ParamLocation::Body)
}

const fn delete(
    group: &'static str,
    name: &'static str,
    path: &'static str,
    params: &'static [ParamSpec],
) -> EndpointDescriptor {
    endpoint(group, name, HttpMethod::Delete, path, params, ParamLocation::Body)
}

const TIME_RANGE: &[ParamSpec] = &[o("start_time"), o("end_time")];
const REQUIRED_TIME_RANGE: &[ParamSpec] = &[r("start_time"), r("end_time")];

/// Every operation of the REST API
pub static ENDPOINTS: &[EndpointDescriptor] = &[
    // Account
    get("Account", "get_account_information", "account", &[]),
    post(
        "Account",
        "request_historical_balances_and_positions_snapshot",
        "historical_balances/requests",
        &[r("accounts"), r("endTime")],
    ),
    get(
        "Account",
        "get_historical_balances_and_positions_snapshot",
        "historical_balances/requests/{request_id}",
        &[o("showAvgPrice")],
    ),
    get(
        "Account",
        "get_all_historical_balances_and_positions_snapshot",
        "historical_balances/requests",
        &[],
    ),
    get("Account", "get_positions", "positions", &[o("showAvgPrice")]),
    post("Account", "change_account_leverage", "account/leverage", &[r("leverage")]),
    // Convert
    post(
        "Convert",
        "request_quote",
        "otc/quotes",
        &[r("fromCoin"), r("toCoin"), r("size")],
    ),
    get("Convert", "get_quote_status", "otc/quotes/{quote_id}", &[o("market")]),
    post("Convert", "accept_quote", "otc/quotes/{quote_id}/accept", &[]),
    // Fills
    get(
        "Fills",
        "get_fills",
        "fills",
        &[o("market"), o("start_time"), o("end_time"), o("order"), o("orderId")],
    ),
    // Funding Payments
    get(
        "Funding Payments",
        "get_funding_payments",
        "funding_payments",
        &[o("start_time"), o("end_time"), o("future")],
    ),
    // Futures
    get("Futures", "list_all_futures", "futures", &[]),
    get("Futures", "get_future", "futures/{future_name}", &[]),
    get("Futures", "get_future_stats", "futures/{future_name}/stats", &[]),
    get(
        "Futures",
        "get_funding_rates",
        "funding_rates",
        &[o("start_time"), o("end_time"), o("future")],
    ),
    get("Futures", "get_index_weights", "indexes/{index_name}/weights", &[]),
    get("Futures", "get_expired_futures", "expired_futures", &[]),
    get(
        "Futures",
        "get_historical_index",
        "indexes/{market_name}/candles",
        &[r("resolution"), o("start_time"), o("end_time")],
    ),
    get(
        "Futures",
        "get_index_constituents",
        "index_constituents/{underlying}",
        &[],
    ),
    // Leveraged Tokens
    get("Leveraged Tokens", "list_leveraged_tokens", "lt/tokens", &[]),
    get("Leveraged Tokens", "get_token_info", "lt/{token_name}", &[]),
    get(
        "Leveraged Tokens",
        "get_leveraged_token_balances",
        "lt/balances",
        &[o("token"), o("balance")],
    ),
    get(
        "Leveraged Tokens",
        "list_leveraged_token_creation_requests",
        "lt/creations",
        &[],
    ),
    post(
        "Leveraged Tokens",
        "request_leveraged_token_creation",
        "lt/{token_name}/create",
        &[r("size")],
    ),
    get(
        "Leveraged Tokens",
        "list_leveraged_token_redemption_requests",
        "lt/redemptions",
        &[],
    ),
    post(
        "Leveraged Tokens",
        "request_leveraged_token_redemption",
        "lt/{token_name}/redeem",
        &[r("size")],
    ),
    get(
        "Leveraged Tokens",
        "request_etf_rebalance_info",
        "etfs/rebalance_info",
        &[],
    ),
    // Markets
    get("Markets", "get_markets", "markets", &[]),
    get("Markets", "get_single_market", "markets/{market_name}", &[o("depth")]),
    get(
        "Markets",
        "get_orderbook",
        "markets/{market_name}/orderbook",
        &[o("depth")],
    ),
    get("Markets", "get_trades", "markets/{market_name}/trades", TIME_RANGE),
    get(
        "Markets",
        "get_historical_prices",
        "markets/{market_name}/candles",
        &[r("resolution"), o("start_time"), o("end_time")],
    ),
    // NFTs
    get("NFTs", "list_nfts", "nft/nfts", &[]),
    get("NFTs", "get_nft_info", "nft/nft/{nft_id}", &[]),
    get("NFTs", "get_nft_trades", "nft/{nft_id}/trades", TIME_RANGE),
    get("NFTs", "get_all_nft_trades", "nft/all_trades", TIME_RANGE),
    get("NFTs", "get_nft_account_info", "nft/{nft_id}/account_info", &[]),
    get("NFTs", "get_all_nft_collections", "nft/collections", &[]),
    get("NFTs", "get_nft_balances", "nft/balances", &[]),
    post("NFTs", "make_nft_offer", "nft/offer", &[r("nftId"), r("price")]),
    post("NFTs", "buy_nft", "nft/buy", &[r("nftId"), r("price")]),
    post(
        "NFTs",
        "create_auction",
        "nft/auction",
        &[
            r("nftId"),
            r("initialPrice"),
            r("reservationPrice"),
            r("duration"),
        ],
    ),
    post(
        "NFTs",
        "edit_auction",
        "nft/edit_auction",
        &[r("nftId"), r("reservationPrice")],
    ),
    post("NFTs", "cancel_auction", "nft/cancel_auction", &[r("nftId")]),
    get("NFTs", "get_bids", "nft/bids", &[]),
    post("NFTs", "place_bid", "nft/bids", &[r("nftId"), r("price")]),
    get("NFTs", "get_nft_deposits", "nft/deposits", TIME_RANGE),
    get("NFTs", "get_nft_withdrawals", "nft/withdrawals", TIME_RANGE),
    get("NFTs", "get_nft_fills", "nft/fills", TIME_RANGE),
    post(
        "NFTs",
        "redeem_nft",
        "nft/redeem",
        &[r("nftId"), r("address"), o("notes")],
    ),
    get("NFTs", "get_nft_gallery", "nft/gallery/{gallery_id}", &[]),
    get("NFTs", "get_gallery_settings", "nft/gallery_settings", &[]),
    post(
        "NFTs",
        "edit_gallery_settings",
        "nft/gallery_settings",
        &[r("public")],
    ),
    // Options
    get("Options", "list_quote_requests", "options/requests", &[]),
    get("Options", "your_quote_requests", "options/my_requests", &[]),
    post(
        "Options",
        "create_quote_request",
        "options/requests",
        &[
            r("underlying"),
            r("type"),
            r("strike"),
            r("expiry"),
            r("side"),
            r("size"),
            o("limitPrice"),
            o("hideLimitPrice"),
            o("requestExpiry"),
            o("counterpartyId"),
        ],
    ),
    delete(
        "Options",
        "cancel_quote_request",
        "options/requests/{request_id}",
        &[],
    ),
    get(
        "Options",
        "get_quotes_for_your_quote_request",
        "options/requests/{request_id}/quotes",
        &[],
    ),
    post(
        "Options",
        "create_quote",
        "options/requests/{request_id}/quotes",
        &[r("price")],
    ),
    get("Options", "get_my_quotes", "options/my_quotes", &[]),
    delete("Options", "cancel_quote", "options/quotes/{quote_id}", &[]),
    post(
        "Options",
        "accept_options_quote",
        "options/quotes/{quote_id}/accept",
        &[],
    ),
    get("Options", "get_account_options_info", "options/account_info", &[]),
    get("Options", "get_options_positions", "options/positions", &[]),
    get("Options", "get_public_options_trades", "options/trades", TIME_RANGE),
    get("Options", "get_options_fills", "options/fills", TIME_RANGE),
    get(
        "Options",
        "get_24h_option_volume",
        "stats/24h_options_volume",
        &[],
    ),
    get(
        "Options",
        "get_option_historical_volumes",
        "options/historical_volumes/{ticker}",
        TIME_RANGE,
    ),
    get(
        "Options",
        "get_option_open_interest",
        "options/open_interest/{ticker}",
        &[],
    ),
    get(
        "Options",
        "get_option_historical_open_interest",
        "options/historical_open_interest/{ticker}",
        TIME_RANGE,
    ),
    // Orders
    get("Orders", "get_open_orders", "orders", &[o("market")]),
    get(
        "Orders",
        "get_order_history",
        "orders/history",
        &[
            o("market"),
            o("side"),
            o("orderType"),
            o("start_time"),
            o("end_time"),
        ],
    ),
    get(
        "Orders",
        "get_open_trigger_orders",
        "conditional_orders",
        &[o("market"), o("type")],
    ),
    get(
        "Orders",
        "get_trigger_order_triggers",
        "conditional_orders/{conditional_order_id}/triggers",
        &[],
    ),
    get(
        "Orders",
        "get_trigger_order_history",
        "conditional_orders/history",
        &[
            o("market"),
            o("start_time"),
            o("end_time"),
            o("side"),
            o("type"),
            o("orderType"),
        ],
    ),
    get("Orders", "get_twap_orders", "twap_orders", &[o("market")]),
    get(
        "Orders",
        "get_twap_order_executions",
        "twap_orders/{twap_order_id}/executions",
        &[],
    ),
    post(
        "Orders",
        "place_order",
        "orders",
        &[
            r("market"),
            r("side"),
            o("price"),
            r("type"),
            r("size"),
            o("reduceOnly"),
            o("ioc"),
            o("postOnly"),
            o("clientId"),
            o("rejectOnPriceBand"),
            o("rejectAfterTs"),
        ],
    ),
    post(
        "Orders",
        "place_trigger_order",
        "conditional_orders",
        &[
            r("market"),
            r("side"),
            r("size"),
            r("type"),
            o("triggerPrice"),
            o("orderPrice"),
            o("trailValue"),
            o("reduceOnly"),
            o("retryUntilFilled"),
        ],
    ),
    post(
        "Orders",
        "place_twap_order",
        "twap_orders",
        &[
            r("market"),
            r("side"),
            r("size"),
            r("type"),
            r("durationSeconds"),
            r("randomizeSize"),
            o("maxSpread"),
            o("maxIndividualOrderSize"),
            o("maxDistanceThroughBook"),
            o("priceBound"),
        ],
    ),
    post(
        "Orders",
        "modify_order",
        "orders/{order_id}/modify",
        &[o("price"), o("size"), o("clientId")],
    ),
    post(
        "Orders",
        "modify_order_by_client_id",
        "orders/by_client_id/{client_order_id}/modify",
        &[o("price"), o("size"), o("clientId")],
    ),
    post(
        "Orders",
        "modify_trigger_order",
        "conditional_orders/{order_id}/modify",
        &[r("size"), o("triggerPrice"), o("orderPrice"), o("trailValue")],
    ),
    get("Orders", "get_order_status", "orders/{order_id}", &[]),
    get(
        "Orders",
        "get_order_status_by_client_id",
        "orders/by_client_id/{client_order_id}",
        &[],
    ),
    delete("Orders", "cancel_order", "orders/{order_id}", &[]),
    delete("Orders", "cancel_twap_order", "twap_orders/{twap_order_id}", &[]),
    delete(
        "Orders",
        "cancel_order_by_client_id",
        "orders/by_client_id/{client_order_id}",
        &[],
    ),
    delete(
        "Orders",
        "cancel_open_trigger_order",
        "conditional_orders/{id}",
        &[],
    ),
    delete(
        "Orders",
        "cancel_all_orders",
        "orders",
        &[
            o("market"),
            o("side"),
            o("conditionalOrdersOnly"),
            o("limitOrdersOnly"),
        ],
    ),
    delete("Orders", "bulk_cancel_orders", "orders/bulk", &[r("orderIds")]),
    delete(
        "Orders",
        "bulk_cancel_orders_by_client_id",
        "bulk_orders_by_client_id",
        &[r("clientOrderIds")],
    ),
    // Spot Margin
    get(
        "Spot Margin",
        "get_lending_history",
        "spot_margin/history",
        TIME_RANGE,
    ),
    get(
        "Spot Margin",
        "get_borrow_rates",
        "spot_margin/borrow_rates",
        &[],
    ),
    get(
        "Spot Margin",
        "get_lending_rates",
        "spot_margin/lending_rates",
        &[],
    ),
    get(
        "Spot Margin",
        "get_daily_borrowed_amounts",
        "spot_margin/borrow_summary",
        &[],
    ),
    get(
        "Spot Margin",
        "get_market_info",
        "spot_margin/market_info",
        &[r("market")],
    ),
    get(
        "Spot Margin",
        "get_my_borrow_history",
        "spot_margin/borrow_history",
        TIME_RANGE,
    ),
    get(
        "Spot Margin",
        "get_my_lending_history",
        "spot_margin/lending_history",
        TIME_RANGE,
    ),
    get("Spot Margin", "get_lending_offers", "spot_margin/offers", &[]),
    get(
        "Spot Margin",
        "get_lending_info",
        "spot_margin/lending_info",
        &[],
    ),
    post(
        "Spot Margin",
        "submit_lending_offer",
        "spot_margin/offers",
        &[r("coin"), r("size"), r("rate")],
    ),
    // Staking
    get("Staking", "get_stakes", "staking/stakes", &[]),
    get(
        "Staking",
        "get_unstake_requests",
        "staking/unstake_requests",
        &[],
    ),
    get("Staking", "get_stake_balances", "staking/balances", &[]),
    post(
        "Staking",
        "unstake_request",
        "staking/unstake_requests",
        &[r("coin"), r("size")],
    ),
    delete(
        "Staking",
        "cancel_unstake_request",
        "staking/unstake_requests/{request_id}",
        &[],
    ),
    get(
        "Staking",
        "get_staking_rewards",
        "staking/staking_rewards",
        TIME_RANGE,
    ),
    post(
        "Staking",
        "stake_request",
        "srm_stakes/stakes",
        &[r("coin"), r("size")],
    ),
    // Stats
    get(
        "Stats",
        "get_latency_statistics",
        "stats/latency_stats",
        &[o("days"), o("subaccount_nickname")],
    ),
    // Subaccounts
    get("Subaccounts", "get_all_subaccounts", "subaccounts", &[]),
    post(
        "Subaccounts",
        "create_subaccount",
        "subaccounts",
        &[r("nickname")],
    ),
    post(
        "Subaccounts",
        "change_subaccount_name",
        "subaccounts/update_name",
        &[r("nickname"), r("newNickname")],
    ),
    delete(
        "Subaccounts",
        "delete_subaccount",
        "subaccounts",
        &[r("nickname")],
    ),
    get(
        "Subaccounts",
        "get_subaccount_balances",
        "subaccounts/{nickname}/balances",
        &[],
    ),
    post(
        "Subaccounts",
        "transfer_between_subaccounts",
        "subaccounts/transfer",
        &[r("coin"), r("size"), r("source"), r("destination")],
    ),
    // Support Tickets
    get(
        "Support Tickets",
        "get_all_support_tickets",
        "support/tickets",
        &[],
    ),
    get(
        "Support Tickets",
        "get_support_ticket_messages",
        "support/tickets/{ticket_id}/messages",
        &[],
    ),
    post(
        "Support Tickets",
        "create_support_ticket",
        "support/tickets",
        &[
            r("title"),
            r("category"),
            r("message"),
            o("fiatDepositId"),
            o("supportFile"),
        ],
    ),
    post(
        "Support Tickets",
        "send_support_message",
        "support/tickets/{ticket_id}/messages",
        &[r("message"), o("supportFile")],
    ),
    post(
        "Support Tickets",
        "update_support_ticket_status",
        "support/tickets/{ticket_id}/status",
        &[r("status")],
    ),
    get(
        "Support Tickets",
        "count_total_number_of_unread_support_messages",
        "support/tickets/count_unread",
        &[],
    ),
    post(
        "Support Tickets",
        "mark_support_messages_read",
        "support/tickets/{ticket_id}/mark_as_read",
        &[],
    ),
    // Wallet
    get("Wallet", "get_coins", "wallet/coins", &[]),
    get("Wallet", "get_balances", "wallet/balances", &[]),
    get("Wallet", "get_balances_of_all_accounts", "wallet/all_balances", &[]),
    get(
        "Wallet",
        "get_deposit_address",
        "wallet/deposit_address/{coin}",
        &[o("method")],
    ),
    post(
        "Wallet",
        "get_deposit_address_list",
        "wallet/deposit_address/list",
        &[r("coin"), o("method")],
    ),
    get(
        "Wallet",
        "get_deposit_history",
        "wallet/deposits",
        REQUIRED_TIME_RANGE,
    ),
    get(
        "Wallet",
        "get_withdrawal_history",
        "wallet/withdrawals",
        REQUIRED_TIME_RANGE,
    ),
    post(
        "Wallet",
        "request_withdrawal",
        "wallet/withdrawals",
        &[
            r("coin"),
            r("size"),
            r("address"),
            o("tag"),
            o("method"),
            o("password"),
            o("code"),
        ],
    ),
    get("Wallet", "get_airdrops", "wallet/airdrops", REQUIRED_TIME_RANGE),
    get(
        "Wallet",
        "get_withdrawal_fees",
        "wallet/withdrawal_fee",
        &[r("coin"), r("size"), r("address"), o("tag"), o("method")],
    ),
    get(
        "Wallet",
        "get_saved_addresses",
        "wallet/saved_addresses",
        &[o("coin")],
    ),
    post(
        "Wallet",
        "create_saved_addresses",
        "wallet/saved_addresses",
        &[
            r("coin"),
            r("address"),
            r("wallet"),
            r("addressName"),
            r("isPrimetrust"),
            o("tag"),
            o("whitelist"),
            o("code"),
        ],
    ),
    delete(
        "Wallet",
        "delete_saved_addresses",
        "wallet/saved_addresses/{saved_address_id}",
        &[],
    ),
    // SEN and Signet links
    post(
        "Wallet",
        "register_sen_deposit",
        "sen/deposits/{sen_link_id}",
        &[r("size")],
    ),
    post(
        "Wallet",
        "request_sen_withdrawal",
        "sen/withdrawals/{sen_link_id}",
        &[r("size")],
    ),
    post(
        "Wallet",
        "register_signet_deposit",
        "signet/deposits/{signet_link_id}",
        &[r("size")],
    ),
    post(
        "Wallet",
        "request_signet_withdrawal",
        "signet/withdrawals/{signet_link_id}",
        &[r("size")],
    ),
];
