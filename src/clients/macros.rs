/// Generates an async client method that sends one [`FormRequest`] variant and
/// awaits its reply, with a tracing span per call.
///
/// Parameters listed in `skip(...)` are kept out of the span.
///
/// [`FormRequest`]: crate::actor_framework::FormRequest
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident $(, skip($($skip:ident),*))?) => {
        impl $client {
            #[tracing::instrument(skip(self $($(, $skip)*)?))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $crate::form_actor::FormError> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|_| $crate::form_actor::FormError::ActorCommunicationError("Actor closed".to_string()))?;

                response
                    .await
                    .map_err(|_| $crate::form_actor::FormError::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}
