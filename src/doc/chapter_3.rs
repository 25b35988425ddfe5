/*!
# Functions

Function names must be followed directly by `(`. Functions marked
optional may be called with nothing between the parentheses.
*/

pub mod ABS {
    /*!
    ## `ABS(X)` Returns the absolute value of X.
    ```text
    PRINT ABS(-0.125)
    0.125
    ```
    */
}

pub mod AREAD {
    /*!
    ## `AREAD(P)` Sets pin P to input and returns its analog level.
    */
}

pub mod BAUD {
    /*!
    ## `BAUD()` `BAUD(R)` Serial port speed.
    Without an argument returns the current rate. With one, sets the rate
    when R is one of 9600, 19200, 38400, 57600 or 115200 and returns 1,
    otherwise returns 0 and leaves the rate alone.
    */
}

pub mod CHR {
    /*!
    ## `CHR$(X)` A value that prints as the character with code X.
    ```text
    PRINT CHR$(65)
    A
    ```
    */
}

pub mod DREAD {
    /*!
    ## `DREAD(P)` Sets pin P to input and returns 0 or 1.
    */
}

pub mod PEEK {
    /*!
    ## `PEEK(A)` Reads one byte of memory.
    Addresses below the size of the BASIC memory read it directly.
    Higher addresses read the external RAM.
    */
}

pub mod REDIRI {
    /*!
    ## `REDIRI()` `REDIRI(S)` Input stream.
    Streams are 0 serial, 1 file, 2 keyboard and 3 screen. With an
    argument the input stream is changed and 1 is returned.
    ```text
    10 X=REDIRI(0)
    ```
    */
}

pub mod REDIRO {
    /*!
    ## `REDIRO()` `REDIRO(S)` Output stream.
    Same stream numbers as `REDIRI`. Output to the serial stream goes
    out of the serial port.
    */
}

pub mod RND {
    /*!
    ## `RND(N)` A random whole number from 0 to N-1.
    N must be at least 1. See `RSEED` for repeatable sequences.
    */
}

pub mod TICKS {
    /*!
    ## `TICKS()` Sixtieths of a second since start-up.
    */
}

pub mod URX {
    /*!
    ## `URX()` `URX(X)` Serial receive.
    Without an argument returns how many bytes are waiting. With any
    argument returns the next byte, or 0 when nothing is waiting.
    */
}

pub mod URXPRT {
    /*!
    ## `URXPRT()` `URXPRT(N)` Copies waiting serial bytes to the output.
    At most N bytes are copied when N is given. Returns the count.
    */
}

pub mod UTX {
    /*!
    ## `UTX()` `UTX(C)` Serial transmit.
    Without an argument returns 1 while the transmitter is busy. With
    one, sends byte C and returns 1.
    */
}

pub mod UTXPRT {
    /*!
    ## `UTXPRT(A)` Sends memory from address A up to a 0 or newline.
    Returns the number of bytes sent.
    */
}
