mod catalog_client;
mod controller;
mod detail_cache;
mod helpers;
