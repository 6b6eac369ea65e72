mod message_service_test;
