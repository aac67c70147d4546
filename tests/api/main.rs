mod health_check;
mod helpers;
mod request_param;
mod request_param_map;
