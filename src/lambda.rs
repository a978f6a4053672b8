use canrev_calc::contact::{handle_proxy_event, ProxyRequest, ProxyResponse};
use canrev_calc::utils::logger;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

async fn function_handler(event: LambdaEvent<ProxyRequest>) -> Result<ProxyResponse, Error> {
    Ok(handle_proxy_event(event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
