mod toggle;
